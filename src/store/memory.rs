//! In-memory store for tests and local runs.
//!
//! [`InMemoryStore`] keeps records in `DashMap`s keyed the same way the
//! DynamoDB tables are (`stepId` / `requestId`). Like the real store it
//! is write-only from the handlers' perspective; the read accessors exist
//! so tests can assert on what was persisted.

use dashmap::DashMap;

use async_trait::async_trait;

use crate::store::{OnboardingStore, StepRecord, StoreError, SubmissionRecord};

/// Thread-safe in-memory [`OnboardingStore`].
///
/// # Examples
///
/// ```
/// use onboarding_flow::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    steps: DashMap<String, StepRecord>,
    submissions: DashMap<String, SubmissionRecord>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step record stored under `step_id`, if any.
    pub fn step(&self, step_id: &str) -> Option<StepRecord> {
        self.steps.get(step_id).map(|entry| entry.value().clone())
    }

    /// Returns the submission stored under `request_id`, if any.
    pub fn submission(&self, request_id: &str) -> Option<SubmissionRecord> {
        self.submissions
            .get(request_id)
            .map(|entry| entry.value().clone())
    }

    /// Returns the number of stored records across both tables.
    pub fn len(&self) -> usize {
        self.steps.len() + self.submissions.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.submissions.is_empty()
    }
}

#[async_trait]
impl OnboardingStore for InMemoryStore {
    async fn put_step(&self, record: &StepRecord) -> Result<(), StoreError> {
        self.steps.insert(record.step_id.clone(), record.clone());
        Ok(())
    }

    async fn put_submission(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        self.submissions
            .insert(record.request_id.clone(), record.clone());
        Ok(())
    }
}

/// Store whose writes always fail; used to exercise failure paths.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl OnboardingStore for FailingStore {
    async fn put_step(&self, _record: &StepRecord) -> Result<(), StoreError> {
        Err(StoreError::backend("injected step write failure", None))
    }

    async fn put_submission(&self, _record: &SubmissionRecord) -> Result<(), StoreError> {
        Err(StoreError::backend("injected submission write failure", None))
    }
}
