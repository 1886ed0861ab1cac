//! Resolution signaling to the workflow orchestrator.
//!
//! The [`WorkflowSignaler`] trait is the seam between the handlers and the
//! orchestrator's signaling endpoint. A [`ResolutionSignal`] is transient:
//! it is built, sent at most once per continuation token, and never
//! persisted. No retries happen here -- a failed signal is surfaced to the
//! handler, which logs and either swallows it (resolver) or re-raises
//! after best-effort failure signaling (registrar); the orchestrator's own
//! timeout policy takes over from there.

pub mod recording;
pub mod sfn;

use async_trait::async_trait;
use thiserror::Error;

/// Error raised by a signaler implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SignalError {
    /// Human-readable description of the failure.
    pub message: String,

    /// The underlying error, if available.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SignalError {
    /// Builds a signal error from a message and optional source.
    pub fn new(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }
}

/// The succeed/fail message that resumes a suspended workflow step.
///
/// # Examples
///
/// ```
/// use onboarding_flow::signal::ResolutionSignal;
///
/// let signal = ResolutionSignal::succeed(r#"{"status":"done"}"#);
/// assert!(signal.is_succeed());
///
/// let signal = ResolutionSignal::fail("TaskToken is missing or empty");
/// assert!(!signal.is_succeed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSignal {
    /// Resume the step successfully, handing `output` (a JSON document)
    /// to the workflow.
    Succeed {
        /// JSON document passed to the workflow as the step's output.
        output: String,
    },

    /// Fail the step with a plain error string.
    Fail {
        /// Why the step failed.
        error: String,
    },
}

impl ResolutionSignal {
    /// Builds a succeed signal carrying the given JSON output.
    pub fn succeed(output: impl Into<String>) -> Self {
        Self::Succeed {
            output: output.into(),
        }
    }

    /// Builds a fail signal carrying the given error string.
    pub fn fail(error: impl Into<String>) -> Self {
        Self::Fail {
            error: error.into(),
        }
    }

    /// Returns `true` for a succeed signal.
    pub fn is_succeed(&self) -> bool {
        matches!(self, Self::Succeed { .. })
    }
}

/// Client for the orchestrator's execution and signaling endpoints.
///
/// Implementations must be `Send + Sync`. The token passed to
/// [`resolve`](WorkflowSignaler::resolve) is opaque and replayed verbatim.
#[async_trait]
pub trait WorkflowSignaler: Send + Sync {
    /// Starts a new workflow execution with the given JSON input.
    ///
    /// Returns the execution's identifier (ARN).
    ///
    /// # Errors
    ///
    /// [`SignalError`] when the orchestrator rejects the request or the
    /// call fails.
    async fn start_execution(&self, input: &str) -> Result<String, SignalError>;

    /// Presents `token` back to the orchestrator with the given signal,
    /// resuming or failing the suspended step.
    ///
    /// # Errors
    ///
    /// [`SignalError`] when the call fails -- including when the
    /// orchestrator rejects an already-resolved or invalid token.
    async fn resolve(&self, token: &str, signal: ResolutionSignal) -> Result<(), SignalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_constructors() {
        assert_eq!(
            ResolutionSignal::succeed("{}"),
            ResolutionSignal::Succeed {
                output: "{}".to_string()
            }
        );
        assert_eq!(
            ResolutionSignal::fail("boom"),
            ResolutionSignal::Fail {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn signal_error_display_is_bare_message() {
        // The message is embedded in returned strings ("Task failed: ..."),
        // so Display must not add its own prefix.
        let err = SignalError::new("task token expired", None);
        assert_eq!(err.to_string(), "task token expired");
    }
}
