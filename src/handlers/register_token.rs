//! Continuation registrar.
//!
//! Receives the orchestrator's callback event -- an opaque task token plus
//! the onboarding payload -- and persists both as a `Pending` step record
//! keyed by the caller's request identifier. The workflow stays suspended
//! until an external event presents the stored token back through the
//! resolver.
//!
//! On any failure (validation or persistence) the handler sends a
//! best-effort fail signal to the orchestrator with the original token,
//! then returns the error so the invocation itself is marked failed. The
//! success path returns a fixed message; the token is never echoed back.

use std::sync::Arc;

use chrono::Utc;

use crate::constants::{REGISTRAR_SUCCESS_MESSAGE, STEP_CREATED_FORMAT};
use crate::error::HandlerError;
use crate::signal::{ResolutionSignal, WorkflowSignaler};
use crate::store::{OnboardingStore, StepRecord};
use crate::types::TaskTokenEvent;

/// Handler core for the `register-token` Lambda.
pub struct RegisterTokenHandler {
    store: Arc<dyn OnboardingStore>,
    signaler: Arc<dyn WorkflowSignaler>,
}

impl RegisterTokenHandler {
    /// Creates a handler over the given store and signaler.
    pub fn new(store: Arc<dyn OnboardingStore>, signaler: Arc<dyn WorkflowSignaler>) -> Self {
        Self { store, signaler }
    }

    /// Processes one callback event.
    ///
    /// Returns the fixed success message once the token is persisted. On
    /// failure, a fail signal carrying the error message is attempted
    /// with the event's token -- even when that token is empty, which is
    /// all we have to offer the orchestrator -- and the error is then
    /// returned to the invoking harness.
    ///
    /// # Errors
    ///
    /// - [`HandlerError::MissingToken`] when the token is absent or empty.
    /// - [`HandlerError::MissingPayload`] when the input is absent or empty.
    /// - [`HandlerError::InvalidRequest`] when the payload has no usable
    ///   request identifier to key the record by.
    /// - [`HandlerError::Persistence`] when the store write fails.
    pub async fn handle(&self, event: TaskTokenEvent) -> Result<String, HandlerError> {
        match self.register(&event).await {
            Ok(message) => Ok(message),
            Err(err) => {
                let signal = ResolutionSignal::fail(err.to_string());
                if let Err(signal_err) = self.signaler.resolve(&event.task_token, signal).await {
                    // Swallowed: the orchestrator's own timeout takes over
                    // when the failure signal never lands.
                    tracing::warn!(
                        error = %signal_err,
                        "failed to send task failure signal"
                    );
                }
                Err(err)
            },
        }
    }

    async fn register(&self, event: &TaskTokenEvent) -> Result<String, HandlerError> {
        if event.task_token.is_empty() {
            return Err(HandlerError::MissingToken);
        }

        let input = event
            .input
            .as_ref()
            .filter(|input| !input.is_empty())
            .ok_or(HandlerError::MissingPayload)?;

        let request_id = input
            .request_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                HandlerError::invalid_request("Input.requestId is missing or empty")
            })?;

        tracing::info!(request_id, "registering task token");

        let snapshot = serde_json::to_string(input).map_err(|e| {
            HandlerError::invalid_request(format!("payload could not be serialized: {e}"))
        })?;
        let created = Utc::now().format(STEP_CREATED_FORMAT).to_string();
        let record = StepRecord::pending(request_id, event.task_token.clone(), snapshot, created);

        self.store.put_step(&record).await?;

        tracing::info!(
            step_id = %record.step_id,
            "task token persisted, awaiting external trigger"
        );
        Ok(REGISTRAR_SUCCESS_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::recording::RecordingSignaler;
    use crate::store::memory::{FailingStore, InMemoryStore};
    use crate::store::StepStatus;
    use serde_json::json;

    fn event(value: serde_json::Value) -> TaskTokenEvent {
        serde_json::from_value(value).expect("test event must deserialize")
    }

    fn handler_with(
        store: Arc<dyn OnboardingStore>,
        signaler: Arc<RecordingSignaler>,
    ) -> RegisterTokenHandler {
        RegisterTokenHandler::new(store, signaler)
    }

    #[tokio::test]
    async fn valid_event_persists_pending_record() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(store.clone(), signaler.clone());

        let message = handler
            .handle(event(json!({
                "TaskToken": "tok-1",
                "Input": {"requestId": "r1", "requestName": "Alice", "TPP": "5", "type": "A"}
            })))
            .await
            .unwrap();

        assert_eq!(message, REGISTRAR_SUCCESS_MESSAGE);

        let record = store.step("step-r1").unwrap();
        assert_eq!(record.token, "tok-1");
        assert_eq!(record.status, StepStatus::Pending);
        // No signal on the happy path; resolution happens later.
        assert!(signaler.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_token_fails_and_signals_with_empty_token() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(store.clone(), signaler.clone());

        let err = handler
            .handle(event(json!({"TaskToken": "", "Input": {"requestId": "r1"}})))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::MissingToken));
        assert!(store.is_empty());

        let resolutions = signaler.resolutions();
        assert_eq!(resolutions.len(), 1);
        assert_eq!(resolutions[0].0, "");
        assert_eq!(
            resolutions[0].1,
            ResolutionSignal::fail("TaskToken is missing or empty")
        );
    }

    #[tokio::test]
    async fn missing_input_fails_with_missing_payload() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(store, signaler.clone());

        let err = handler
            .handle(event(json!({"TaskToken": "tok-1"})))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::MissingPayload));
        let resolutions = signaler.resolutions();
        assert_eq!(resolutions[0].0, "tok-1");
        assert_eq!(
            resolutions[0].1,
            ResolutionSignal::fail("Input data is missing or empty")
        );
    }

    #[tokio::test]
    async fn empty_input_object_fails_with_missing_payload() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(store, signaler);

        let err = handler
            .handle(event(json!({"TaskToken": "tok-1", "Input": {}})))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::MissingPayload));
    }

    #[tokio::test]
    async fn store_failure_signals_then_raises() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(Arc::new(FailingStore), signaler.clone());

        let err = handler
            .handle(event(json!({
                "TaskToken": "tok-2",
                "Input": {"requestId": "r2"}
            })))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::Persistence(_)));
        let resolutions = signaler.resolutions();
        assert_eq!(resolutions.len(), 1);
        assert_eq!(resolutions[0].0, "tok-2");
        assert!(!resolutions[0].1.is_succeed());
    }

    #[tokio::test]
    async fn failure_signal_failure_is_swallowed() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        signaler.fail_resolve();
        let handler = handler_with(store, signaler);

        // The original validation error still surfaces, not the signal one.
        let err = handler
            .handle(event(json!({"TaskToken": ""})))
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingToken));
    }

    #[tokio::test]
    async fn snapshot_round_trips_submitted_fields() {
        let store = Arc::new(InMemoryStore::new());
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = handler_with(store.clone(), signaler);

        handler
            .handle(event(json!({
                "TaskToken": "tok-3",
                "Input": {
                    "requestId": "r3",
                    "requestName": "Bob",
                    "TPP": "9",
                    "type": "B",
                    "requestStatus": "Pending"
                }
            })))
            .await
            .unwrap();

        let record = store.step("step-r3").unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(&record.result).unwrap();
        assert_eq!(snapshot["requestId"], "r3");
        assert_eq!(snapshot["requestName"], "Bob");
        assert_eq!(snapshot["TPP"], "9");
        assert_eq!(snapshot["type"], "B");
        assert_eq!(snapshot["requestStatus"], "Pending");
        // Fields that were not submitted stay absent.
        assert!(snapshot.get("requestEmail").is_none());
    }
}
