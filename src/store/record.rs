//! Persisted record shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{STEP_ID_PREFIX, STEP_NAME};
use crate::types::AdditionalInfo;

/// Resolution state of a persisted task token.
///
/// A record is created `Pending` and moves to a terminal state when the
/// suspended workflow step is resolved. Terminal states accept no further
/// transition; re-presenting an already-resolved token is rejected by the
/// orchestrator itself, so the status flag is a record, not a lock.
///
/// # State Machine
///
/// ```text
/// Pending -> Completed, Failed
/// Completed -> (terminal, no transitions)
/// Failed -> (terminal, no transitions)
/// ```
///
/// # Examples
///
/// ```
/// use onboarding_flow::StepStatus;
///
/// assert!(!StepStatus::Pending.is_terminal());
/// assert!(StepStatus::Pending.can_transition_to(StepStatus::Completed));
/// assert!(!StepStatus::Completed.can_transition_to(StepStatus::Pending));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    /// Token persisted, workflow suspended awaiting an external signal.
    Pending,
    /// The step was resolved with a succeed signal (terminal).
    Completed,
    /// The step was resolved with a fail signal (terminal).
    Failed,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

impl StepStatus {
    /// Returns `true` if this status accepts no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns `true` if moving from this status to `next` is valid.
    ///
    /// Only `Pending` can move, and only to a terminal state.
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(self, Self::Pending) && next.is_terminal()
    }
}

/// The correlation record persisted by the registrar.
///
/// Keyed by [`step_id`](StepRecord::step_id), which prefixes the caller's
/// request identifier. The `token` is the orchestrator's opaque
/// continuation handle, stored verbatim. The `result` field holds the
/// JSON-serialized snapshot of the triggering payload so a later reader
/// gets back exactly the field set that was submitted.
///
/// # Examples
///
/// ```
/// use onboarding_flow::{StepRecord, StepStatus};
///
/// let record = StepRecord::pending(
///     "r1",
///     "tok-1".to_string(),
///     r#"{"requestId":"r1"}"#.to_string(),
///     "2026-08-06 10:15:00".to_string(),
/// );
/// assert_eq!(record.step_id, "step-r1");
/// assert_eq!(record.status, StepStatus::Pending);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Partition key: `"step-" + request_id`.
    #[serde(rename = "stepId")]
    pub step_id: String,

    /// The caller's correlation identifier.
    #[serde(rename = "requestId")]
    pub request_id: String,

    /// The workflow step this token belongs to.
    pub name: String,

    /// Resolution state; `Pending` on creation.
    pub status: StepStatus,

    /// Opaque continuation token, stored verbatim.
    pub token: String,

    /// JSON-serialized snapshot of the triggering payload.
    pub result: String,

    /// Creation timestamp, formatted `%Y-%m-%d %H:%M:%S`.
    pub created: String,
}

impl StepRecord {
    /// Builds a `Pending` record for a freshly registered token.
    pub fn pending(request_id: &str, token: String, result: String, created: String) -> Self {
        Self {
            step_id: format!("{STEP_ID_PREFIX}{request_id}"),
            request_id: request_id.to_string(),
            name: STEP_NAME.to_string(),
            status: StepStatus::Pending,
            token,
            result,
            created,
        }
    }
}

/// A validated onboarding submission, as persisted.
///
/// Timestamps have already been reformatted to `%d-%m-%Y` by the validate
/// handler; `TPP` is persisted as a numeric attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Partition key: the caller's correlation identifier.
    #[serde(rename = "requestId")]
    pub request_id: String,

    /// Creation date (`%d-%m-%Y`).
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Contact email for the request.
    #[serde(rename = "requestEmail")]
    pub request_email: String,

    /// Display name of the requester.
    #[serde(rename = "requestName")]
    pub request_name: String,

    /// Current workflow status of the request.
    #[serde(rename = "requestStatus")]
    pub request_status: String,

    /// Third-party-provider identifier.
    #[serde(rename = "TPP")]
    pub tpp: String,

    /// Request type discriminator.
    #[serde(rename = "type")]
    pub request_type: String,

    /// Last-update date (`%d-%m-%Y`).
    #[serde(rename = "updatedAt")]
    pub updated_at: String,

    /// Extra attributes, when submitted.
    #[serde(rename = "additionalInfo", skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}
