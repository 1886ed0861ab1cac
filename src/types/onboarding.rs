//! Onboarding payload types.
//!
//! Three related shapes cross the boundary:
//!
//! - [`OnboardingRequest`] -- the HTTP body that starts the workflow.
//! - [`OnboardingInput`] -- the execution input the workflow carries, and
//!   the nested `Input` mapping the registrar snapshots. All fields are
//!   optional here; the handlers enforce presence where their contracts
//!   require it.
//! - [`OnboardingSubmission`] -- the HTTP body of a validated submission.
//!
//! Serialization preserves the established wire names: `TPP` stays
//! upper-case and `type` is a reserved word, so both carry explicit
//! renames. `None` fields are omitted, which keeps the registrar's stored
//! snapshot limited to the fields that were actually submitted.

use serde::{Deserialize, Serialize};

/// HTTP request body that starts an onboarding execution.
///
/// `requestId`, `requestName`, `TPP`, and `type` must all be present;
/// the string fields must additionally be non-empty. Validation lives in
/// the start handler.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingRequest {
    /// Caller-supplied correlation identifier.
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,

    /// Display name of the requester.
    #[serde(rename = "requestName")]
    pub request_name: Option<String>,

    /// Third-party-provider identifier.
    #[serde(rename = "TPP")]
    pub tpp: Option<String>,

    /// Request type discriminator.
    #[serde(rename = "type")]
    pub request_type: Option<String>,
}

/// Extra attributes attached to an onboarding request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Whether the requester is a client bank.
    #[serde(rename = "clientBank")]
    pub client_bank: bool,
}

/// The execution input the workflow carries between steps.
///
/// This is also the `Input` mapping the registrar receives and snapshots
/// into the step record. Every field is optional: the registrar treats an
/// entirely empty mapping as a missing payload but otherwise stores
/// whatever subset was submitted.
///
/// # Examples
///
/// ```
/// use onboarding_flow::types::OnboardingInput;
///
/// let input: OnboardingInput =
///     serde_json::from_str(r#"{"requestId":"r1","TPP":"5"}"#).unwrap();
/// assert!(!input.is_empty());
///
/// // Omitted fields stay omitted on the way back out.
/// let json = serde_json::to_value(&input).unwrap();
/// assert_eq!(json["requestId"], "r1");
/// assert!(json.get("requestName").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingInput {
    /// Caller-supplied correlation identifier.
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Display name of the requester.
    #[serde(rename = "requestName", skip_serializing_if = "Option::is_none")]
    pub request_name: Option<String>,

    /// When the request was created (`%d-%m-%Y`).
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Contact email derived from the requester name.
    #[serde(rename = "requestEmail", skip_serializing_if = "Option::is_none")]
    pub request_email: Option<String>,

    /// Third-party-provider identifier.
    #[serde(rename = "TPP", skip_serializing_if = "Option::is_none")]
    pub tpp: Option<String>,

    /// Extra attributes; passed through opaquely by the registrar.
    #[serde(rename = "additionalInfo", skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,

    /// Request type discriminator.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    /// Current workflow status of the request.
    #[serde(rename = "requestStatus", skip_serializing_if = "Option::is_none")]
    pub request_status: Option<String>,

    /// When the request was last updated (`%d-%m-%Y`).
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl OnboardingInput {
    /// Returns `true` when no field was submitted at all.
    ///
    /// An empty `Input` mapping deserializes to exactly this, and the
    /// registrar rejects it the same way it rejects an absent one.
    pub fn is_empty(&self) -> bool {
        self.request_id.is_none()
            && self.request_name.is_none()
            && self.created_at.is_none()
            && self.request_email.is_none()
            && self.tpp.is_none()
            && self.additional_info.is_none()
            && self.request_type.is_none()
            && self.request_status.is_none()
            && self.updated_at.is_none()
    }
}

/// HTTP request body of a validated onboarding submission.
///
/// `requestEmail`, `requestName`, `type`, `requestStatus`, and `TPP` must
/// be present; email, name, and type must be non-empty. The timestamps
/// arrive as `%Y-%m-%dT%H:%M:%SZ` and are reformatted before persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingSubmission {
    /// Caller-supplied correlation identifier.
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,

    /// Contact email for the request.
    #[serde(rename = "requestEmail")]
    pub request_email: Option<String>,

    /// Display name of the requester.
    #[serde(rename = "requestName")]
    pub request_name: Option<String>,

    /// Request type discriminator.
    #[serde(rename = "type")]
    pub request_type: Option<String>,

    /// Current workflow status of the request.
    #[serde(rename = "requestStatus")]
    pub request_status: Option<String>,

    /// Third-party-provider identifier; persisted as a numeric attribute.
    #[serde(rename = "TPP")]
    pub tpp: Option<String>,

    /// Creation timestamp (`%Y-%m-%dT%H:%M:%SZ`).
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    /// Last-update timestamp (`%Y-%m-%dT%H:%M:%SZ`).
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,

    /// Extra attributes.
    #[serde(rename = "additionalInfo")]
    pub additional_info: Option<AdditionalInfo>,
}
