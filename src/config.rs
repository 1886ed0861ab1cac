//! Environment-sourced configuration.
//!
//! Each binary reads its configuration once at startup via
//! [`FlowConfig::from_env`]. Table names fall back to the deployed
//! defaults; the state machine ARN has no default and is only required by
//! the handler that starts executions.

use std::env;

use crate::constants::{DEFAULT_ONBOARDING_TABLE, DEFAULT_STEP_RESULTS_TABLE};

/// Runtime configuration for the onboarding handlers.
///
/// # Environment
///
/// | Variable             | Default              | Used by                  |
/// |----------------------|----------------------|--------------------------|
/// | `STEP_RESULTS_TABLE` | `step_results`       | register-token           |
/// | `ONBOARDING_TABLE`   | `onboarding_request` | validate-request         |
/// | `STATE_MACHINE_ARN`  | none                 | start-onboarding         |
///
/// # Examples
///
/// ```
/// use onboarding_flow::FlowConfig;
///
/// let config = FlowConfig::from_env();
/// assert!(!config.step_results_table.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Table holding persisted task tokens.
    pub step_results_table: String,

    /// Table holding validated onboarding submissions.
    pub onboarding_table: String,

    /// ARN of the onboarding state machine. `None` when unset; the
    /// start-onboarding binary refuses to boot without it.
    pub state_machine_arn: Option<String>,
}

impl FlowConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset or empty table variables fall back to the defaults. An unset
    /// or empty `STATE_MACHINE_ARN` yields `None`.
    pub fn from_env() -> Self {
        Self {
            step_results_table: env_or_default("STEP_RESULTS_TABLE", DEFAULT_STEP_RESULTS_TABLE),
            onboarding_table: env_or_default("ONBOARDING_TABLE", DEFAULT_ONBOARDING_TABLE),
            state_machine_arn: env::var("STATE_MACHINE_ARN")
                .ok()
                .filter(|arn| !arn.is_empty()),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        // Fresh process env in tests may carry the variables; construct
        // via the helper to keep the assertion hermetic.
        assert_eq!(env_or_default("ONBOARDING_FLOW_UNSET_VAR", "fallback"), "fallback");
    }
}
