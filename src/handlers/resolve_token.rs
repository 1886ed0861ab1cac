//! Continuation resolver.
//!
//! Presents a continuation token back to the orchestrator with a succeed
//! signal, resuming the suspended workflow step. The token is sourced
//! externally -- typically read back from the step record the registrar
//! persisted -- and replayed verbatim.
//!
//! This handler never raises. Its caller treats the returned string as
//! the terminal outcome, so a missing token or a failed signal both fold
//! into a descriptive `"Task failed: ..."` string rather than an error
//! the harness would retry.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::constants::RESOLVER_MISSING_TOKEN_MESSAGE;
use crate::signal::{ResolutionSignal, WorkflowSignaler};
use crate::types::ResolveTaskEvent;

/// Handler core for the `resolve-token` Lambda.
pub struct ResolveTokenHandler {
    signaler: Arc<dyn WorkflowSignaler>,
}

impl ResolveTokenHandler {
    /// Creates a handler over the given signaler.
    pub fn new(signaler: Arc<dyn WorkflowSignaler>) -> Self {
        Self { signaler }
    }

    /// Processes one resolution event, returning the terminal outcome as
    /// a string.
    ///
    /// Without a token nothing is sent and the fixed failure message is
    /// returned. With a token, exactly one succeed signal is attempted;
    /// its output is a JSON object keyed `Payload`, holding the event's
    /// payload or a fixed default.
    pub async fn handle(&self, event: ResolveTaskEvent) -> String {
        if event.task_token.is_empty() {
            tracing::warn!("resolution event carried no task token");
            return RESOLVER_MISSING_TOKEN_MESSAGE.to_string();
        }

        let output = json!({ "Payload": event.payload.unwrap_or_else(default_payload) });
        let output_json = match serde_json::to_string(&output) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize resolution output");
                return format!("Task failed: {err}");
            },
        };

        match self
            .signaler
            .resolve(&event.task_token, ResolutionSignal::succeed(output_json.clone()))
            .await
        {
            Ok(()) => {
                tracing::info!("task success signal sent");
                format!("Task success sent with output: {output_json}")
            },
            Err(err) => {
                // No retry: the orchestrator's timeout policy owns recovery.
                tracing::warn!(error = %err, "failed to send task success signal");
                format!("Task failed: {err}")
            },
        }
    }
}

fn default_payload() -> Value {
    json!({ "key": "hola mundo" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::recording::RecordingSignaler;
    use serde_json::json;

    fn event(value: serde_json::Value) -> ResolveTaskEvent {
        serde_json::from_value(value).expect("test event must deserialize")
    }

    #[tokio::test]
    async fn missing_token_returns_failure_without_signaling() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = ResolveTokenHandler::new(signaler.clone());

        let outcome = handler.handle(event(json!({}))).await;

        assert_eq!(outcome, RESOLVER_MISSING_TOKEN_MESSAGE);
        assert!(signaler.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_token_sends_exactly_one_succeed_signal() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = ResolveTokenHandler::new(signaler.clone());

        let outcome = handler
            .handle(event(json!({"TaskToken": "tok-1"})))
            .await;

        assert!(outcome.starts_with("Task success sent with output: "));

        let resolutions = signaler.resolutions();
        assert_eq!(resolutions.len(), 1);
        assert_eq!(resolutions[0].0, "tok-1");

        let ResolutionSignal::Succeed { ref output } = resolutions[0].1 else {
            panic!("expected a succeed signal");
        };
        let parsed: serde_json::Value = serde_json::from_str(output).unwrap();
        assert!(parsed.get("Payload").is_some(), "output must be keyed Payload");
    }

    #[tokio::test]
    async fn event_payload_is_forwarded() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = ResolveTokenHandler::new(signaler.clone());

        handler
            .handle(event(json!({
                "TaskToken": "tok-2",
                "Payload": {"approved": true}
            })))
            .await;

        let resolutions = signaler.resolutions();
        let ResolutionSignal::Succeed { ref output } = resolutions[0].1 else {
            panic!("expected a succeed signal");
        };
        let parsed: serde_json::Value = serde_json::from_str(output).unwrap();
        assert_eq!(parsed["Payload"]["approved"], true);
    }

    #[tokio::test]
    async fn signal_failure_becomes_returned_string() {
        let signaler = Arc::new(RecordingSignaler::new());
        signaler.fail_resolve();
        let handler = ResolveTokenHandler::new(signaler.clone());

        let outcome = handler
            .handle(event(json!({"TaskToken": "tok-3"})))
            .await;

        assert!(outcome.starts_with("Task failed: "));
        // The send was attempted exactly once; no retries.
        assert_eq!(signaler.resolutions().len(), 1);
    }
}
