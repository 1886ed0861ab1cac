//! Typed boundary records.
//!
//! Every payload that crosses the Lambda boundary is parsed into an
//! explicit record here, once, with the established wire names preserved
//! (`TaskToken`, `TPP`, `type`). Presence rules are enforced by the
//! handlers, not by serde, so that a malformed event still reaches the
//! handler and can trigger the contractual failure path (e.g. a failure
//! signal to the orchestrator) instead of dying in deserialization.

pub mod event;
pub mod onboarding;
pub mod response;

pub use event::{ResolveTaskEvent, TaskTokenEvent};
pub use onboarding::{AdditionalInfo, OnboardingInput, OnboardingRequest, OnboardingSubmission};
pub use response::{error_response, json_response, ErrorBody, ErrorEnvelope};
