//! Inbound events for the continuation handlers.
//!
//! Both events default every field so that a missing `TaskToken` arrives
//! as an empty string rather than a deserialization error -- the handlers
//! own the validation and its failure contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::onboarding::OnboardingInput;

/// Event delivered to the registrar by the orchestrator's callback task.
///
/// Carries the opaque continuation token and the onboarding payload the
/// execution was started with.
///
/// # Examples
///
/// ```
/// use onboarding_flow::types::TaskTokenEvent;
///
/// let event: TaskTokenEvent = serde_json::from_str(
///     r#"{"TaskToken":"tok-1","Input":{"requestId":"r1"}}"#,
/// ).unwrap();
/// assert_eq!(event.task_token, "tok-1");
/// assert_eq!(event.input.unwrap().request_id.as_deref(), Some("r1"));
///
/// // A missing token deserializes as empty -- validation happens later.
/// let event: TaskTokenEvent = serde_json::from_str("{}").unwrap();
/// assert!(event.task_token.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskTokenEvent {
    /// Opaque token issued by the orchestrator. Stored and replayed
    /// verbatim; never parsed or generated locally.
    #[serde(rename = "TaskToken", default)]
    pub task_token: String,

    /// The onboarding payload the execution carries.
    #[serde(rename = "Input", default, skip_serializing_if = "Option::is_none")]
    pub input: Option<OnboardingInput>,
}

/// Event delivered to the resolver.
///
/// The token is sourced externally (typically read back from the step
/// record persisted by the registrar). The payload is optional; when
/// absent the resolver falls back to its fixed output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveTaskEvent {
    /// Opaque token identifying the suspended execution to resume.
    #[serde(rename = "TaskToken", default)]
    pub task_token: String,

    /// Result payload to hand back to the workflow, if any.
    #[serde(rename = "Payload", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}
