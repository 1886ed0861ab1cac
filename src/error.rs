//! Error types for the onboarding handlers.
//!
//! [`HandlerError`] is the domain error each handler core returns. The two
//! continuation handlers treat it differently by contract: the registrar
//! propagates it to the invoking harness (so the invocation is marked
//! failed) after a best-effort failure signal, while the resolver converts
//! every failure into a returned string and never raises.

use thiserror::Error;

use crate::signal::SignalError;
use crate::store::StoreError;

/// Errors that can occur inside a handler core.
///
/// The `Display` messages double as the error text sent to the
/// orchestrator in failure signals, so they must describe the problem
/// without leaning on local context.
///
/// # Examples
///
/// ```
/// use onboarding_flow::HandlerError;
///
/// assert_eq!(
///     HandlerError::MissingToken.to_string(),
///     "TaskToken is missing or empty"
/// );
/// assert_eq!(
///     HandlerError::MissingPayload.to_string(),
///     "Input data is missing or empty"
/// );
/// ```
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event carried no task token, or an empty one.
    #[error("TaskToken is missing or empty")]
    MissingToken,

    /// The event carried no input payload, or an empty one.
    #[error("Input data is missing or empty")]
    MissingPayload,

    /// The request failed boundary validation.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// Writing to the external store failed.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// Sending a signal to the orchestrator failed.
    #[error("signal failed: {0}")]
    Signal(#[from] SignalError),
}

impl HandlerError {
    /// Builds an [`InvalidRequest`](HandlerError::InvalidRequest) error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_signal_contract() {
        // These exact strings travel to the orchestrator in failure causes.
        assert_eq!(
            HandlerError::MissingToken.to_string(),
            "TaskToken is missing or empty"
        );
        assert_eq!(
            HandlerError::MissingPayload.to_string(),
            "Input data is missing or empty"
        );
    }

    #[test]
    fn store_error_converts() {
        let err: HandlerError = StoreError::backend("table missing", None).into();
        assert!(matches!(err, HandlerError::Persistence(_)));
        assert!(err.to_string().contains("table missing"));
    }

    #[test]
    fn signal_error_converts() {
        let err: HandlerError = SignalError::new("connection reset", None).into();
        assert!(matches!(err, HandlerError::Signal(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn invalid_request_carries_message() {
        let err = HandlerError::invalid_request("requestId must be present");
        assert_eq!(
            err.to_string(),
            "invalid request: requestId must be present"
        );
    }
}
