//! Step Functions signaler.
//!
//! [`SfnSignaler`] implements [`WorkflowSignaler`] against AWS Step
//! Functions: `StartExecution` for new executions, `SendTaskSuccess` /
//! `SendTaskFailure` for resolution signals. The task token travels
//! verbatim; a token the service no longer recognizes (already resolved,
//! timed out) surfaces as a [`SignalError`] like any other call failure.
//!
//! # Usage
//!
//! ```rust,no_run
//! use onboarding_flow::signal::sfn::SfnSignaler;
//!
//! # async fn example() {
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = aws_sdk_sfn::Client::new(&config);
//! let signaler = SfnSignaler::new(client, Some("arn:aws:states:...".to_string()));
//! # }
//! ```

use async_trait::async_trait;
use aws_sdk_sfn::Client;

use crate::signal::{ResolutionSignal, SignalError, WorkflowSignaler};

/// Step Functions implementation of [`WorkflowSignaler`].
#[derive(Debug, Clone)]
pub struct SfnSignaler {
    client: Client,
    state_machine_arn: Option<String>,
}

impl SfnSignaler {
    /// Creates a signaler with a pre-built Step Functions client.
    ///
    /// `state_machine_arn` is only needed by
    /// [`start_execution`](WorkflowSignaler::start_execution); resolution
    /// signals address a token, not a state machine.
    pub fn new(client: Client, state_machine_arn: Option<String>) -> Self {
        Self {
            client,
            state_machine_arn,
        }
    }

    /// Creates a signaler using the standard AWS SDK config chain, with
    /// the state machine ARN taken from the `STATE_MACHINE_ARN`
    /// environment variable (if set).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        let arn = std::env::var("STATE_MACHINE_ARN")
            .ok()
            .filter(|arn| !arn.is_empty());
        Self::new(client, arn)
    }
}

fn map_sdk_error(err: impl std::error::Error + Send + Sync + 'static) -> SignalError {
    SignalError::new(format!("Step Functions error: {err}"), Some(Box::new(err)))
}

#[async_trait]
impl WorkflowSignaler for SfnSignaler {
    async fn start_execution(&self, input: &str) -> Result<String, SignalError> {
        let arn = self.state_machine_arn.as_deref().ok_or_else(|| {
            SignalError::new("state machine ARN is not configured", None)
        })?;

        let output = self
            .client
            .start_execution()
            .state_machine_arn(arn)
            .input(input)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(output.execution_arn().to_string())
    }

    async fn resolve(&self, token: &str, signal: ResolutionSignal) -> Result<(), SignalError> {
        match signal {
            ResolutionSignal::Succeed { output } => {
                self.client
                    .send_task_success()
                    .task_token(token)
                    .output(output)
                    .send()
                    .await
                    .map_err(map_sdk_error)?;
            },
            ResolutionSignal::Fail { error } => {
                self.client
                    .send_task_failure()
                    .task_token(token)
                    .error(error)
                    .send()
                    .await
                    .map_err(map_sdk_error)?;
            },
        }
        Ok(())
    }
}
