//! Recording signaler for tests and local runs.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::signal::{ResolutionSignal, SignalError, WorkflowSignaler};

/// A signaling call observed by [`RecordingSignaler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// A `start_execution` call with its JSON input.
    StartExecution {
        /// The execution input as passed.
        input: String,
    },

    /// A `resolve` call with the token and signal as passed.
    Resolve {
        /// The continuation token, verbatim.
        token: String,
        /// The signal that was sent.
        signal: ResolutionSignal,
    },
}

/// [`WorkflowSignaler`] that records every call instead of talking to an
/// orchestrator. Failure injection flags let tests drive the error paths.
///
/// # Examples
///
/// ```
/// use onboarding_flow::signal::recording::RecordingSignaler;
/// use onboarding_flow::signal::{ResolutionSignal, WorkflowSignaler};
///
/// # async fn example() {
/// let signaler = RecordingSignaler::new();
/// signaler.resolve("tok-1", ResolutionSignal::fail("boom")).await.unwrap();
/// assert_eq!(signaler.calls().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordingSignaler {
    calls: Mutex<Vec<RecordedCall>>,
    fail_start: AtomicBool,
    fail_resolve: AtomicBool,
    executions: AtomicU64,
}

impl RecordingSignaler {
    /// Creates a signaler that accepts every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `start_execution` calls fail.
    pub fn fail_start_execution(&self) {
        self.fail_start.store(true, Ordering::SeqCst);
    }

    /// Makes subsequent `resolve` calls fail. Calls are still recorded,
    /// so tests can assert that a send was attempted.
    pub fn fail_resolve(&self) {
        self.fail_resolve.store(true, Ordering::SeqCst);
    }

    /// Returns a copy of every recorded call, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("signaler mutex poisoned").clone()
    }

    /// Returns the recorded `resolve` calls only.
    pub fn resolutions(&self) -> Vec<(String, ResolutionSignal)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Resolve { token, signal } => Some((token, signal)),
                RecordedCall::StartExecution { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("signaler mutex poisoned").push(call);
    }
}

#[async_trait]
impl WorkflowSignaler for RecordingSignaler {
    async fn start_execution(&self, input: &str) -> Result<String, SignalError> {
        if self.fail_start.load(Ordering::SeqCst) {
            return Err(SignalError::new("injected start failure", None));
        }

        self.record(RecordedCall::StartExecution {
            input: input.to_string(),
        });

        let n = self.executions.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "arn:aws:states:local:000000000000:execution:onboarding:{n}"
        ))
    }

    async fn resolve(&self, token: &str, signal: ResolutionSignal) -> Result<(), SignalError> {
        self.record(RecordedCall::Resolve {
            token: token.to_string(),
            signal,
        });

        if self.fail_resolve.load(Ordering::SeqCst) {
            return Err(SignalError::new("injected resolve failure", None));
        }
        Ok(())
    }
}
