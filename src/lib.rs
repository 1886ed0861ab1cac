//! Lambda handlers for the TPP onboarding workflow.
//!
//! This crate implements the four functions that front the onboarding
//! flow: an HTTP-triggered handler that starts a Step Functions execution,
//! an HTTP-triggered handler that persists a validated submission, and the
//! task-token continuation pair that pauses and resumes the workflow:
//!
//! - **Registrar** ([`handlers::RegisterTokenHandler`]) receives the
//!   orchestrator's opaque task token together with the onboarding payload,
//!   persists both keyed by the request identifier, and signals task failure
//!   back to the orchestrator before surfacing any error.
//! - **Resolver** ([`handlers::ResolveTokenHandler`]) presents a stored
//!   token back to the orchestrator to resume the suspended execution. It
//!   always returns a descriptive string, never an error.
//!
//! # Continuation Lifecycle
//!
//! ```text
//! SUSPENDED --(registrar persists token, status=Pending)--> AWAITING_SIGNAL
//! AWAITING_SIGNAL --(resolver sends succeed signal)--> RESOLVED_SUCCESS (terminal)
//! AWAITING_SIGNAL --(fail signal, or registrar failure)--> RESOLVED_FAILURE (terminal)
//! ```
//!
//! The token is opaque: it is stored and replayed verbatim, never parsed or
//! generated locally. Presenting a token twice is rejected by the
//! orchestrator itself; the persisted status flag is the only local record
//! of resolution.
//!
//! # Module Organization
//!
//! - [`types`] - Typed boundary records for events, payloads, and responses
//! - [`store`] - Step/submission persistence behind the [`store::OnboardingStore`] seam
//! - [`signal`] - Orchestrator signaling behind the [`signal::WorkflowSignaler`] seam
//! - [`handlers`] - The four handler cores, generic over both seams
//! - [`error`] - [`HandlerError`] with the failure kinds each handler maps
//! - [`config`] - Environment-sourced table names and state machine ARN
//! - [`constants`] - Fixed messages, key prefix, timestamp formats

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod signal;
pub mod store;
pub mod types;

// Re-exports for ergonomic access
pub use config::FlowConfig;
pub use error::HandlerError;
pub use store::{StepRecord, StepStatus};
