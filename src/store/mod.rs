//! Persistence for correlation records.
//!
//! The [`OnboardingStore`] trait is the seam between the handlers and the
//! external key-value store. Implementations are write-only adapters with
//! no domain logic: validation, key derivation, and snapshot serialization
//! all happen in the handlers before a record reaches the store.
//!
//! Two implementations exist: [`DynamoDbStore`](dynamodb::DynamoDbStore)
//! for deployment and [`InMemoryStore`](memory::InMemoryStore) for tests
//! and local runs.
//!
//! Records are created once and never deleted here; their lifecycle is
//! owned by the store's retention policy.

pub mod dynamodb;
pub mod memory;
pub mod record;

use async_trait::async_trait;
use thiserror::Error;

pub use record::{StepRecord, StepStatus, SubmissionRecord};

/// Error raised by a store implementation.
///
/// Carries a human-readable message and, when available, the underlying
/// SDK error as `source`.
///
/// # Examples
///
/// ```
/// use onboarding_flow::store::StoreError;
///
/// let err = StoreError::backend("table not found: step_results", None);
/// assert!(err.to_string().contains("step_results"));
/// ```
#[derive(Debug, Error)]
#[error("storage backend error: {message}")]
pub struct StoreError {
    /// Human-readable description of the failure.
    pub message: String,

    /// The underlying error, if available.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Builds a backend error from a message and optional source.
    pub fn backend(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }
}

/// Write-only store for onboarding records.
///
/// Implementations must be `Send + Sync`; concurrent invocations touch
/// independent keys and rely on the external store's own concurrency
/// safety.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// Persists a task-token step record.
    ///
    /// One record per registrar invocation. An existing record under the
    /// same key is overwritten (the external orchestrator guarantees a
    /// token is only issued once per suspended step).
    ///
    /// # Errors
    ///
    /// [`StoreError`] on I/O or backend-specific failures.
    async fn put_step(&self, record: &StepRecord) -> Result<(), StoreError>;

    /// Persists a validated onboarding submission.
    ///
    /// # Errors
    ///
    /// [`StoreError`] on I/O or backend-specific failures.
    async fn put_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::backend("connection timeout", None);
        assert_eq!(err.to_string(), "storage backend error: connection timeout");
    }

    #[test]
    fn store_error_source_is_exposed() {
        let inner = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = StoreError::backend("db failed", Some(Box::new(inner)));
        let source = std::error::Error::source(&err);
        assert!(source.unwrap().to_string().contains("timed out"));
    }
}
