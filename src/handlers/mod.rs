//! Handler cores for the four Lambda functions.
//!
//! Each handler owns its collaborators behind the seam traits
//! ([`OnboardingStore`](crate::store::OnboardingStore),
//! [`WorkflowSignaler`](crate::signal::WorkflowSignaler), shared via
//! `Arc`), so the cores are exercised in tests with in-memory
//! implementations and wired to AWS clients only in the binaries.
//!
//! The two continuation handlers have deliberately asymmetric failure
//! contracts:
//!
//! - [`RegisterTokenHandler`] raises: any failure is reported to the
//!   orchestrator with a best-effort fail signal and then returned as
//!   `Err`, so the invoking harness marks the invocation failed.
//! - [`ResolveTokenHandler`] never raises: its caller consumes the
//!   returned string as the terminal outcome, so every failure is caught
//!   and folded into that string.

pub mod register_token;
pub mod resolve_token;
pub mod start_onboarding;
pub mod validate_request;

pub use register_token::RegisterTokenHandler;
pub use resolve_token::ResolveTokenHandler;
pub use start_onboarding::StartOnboardingHandler;
pub use validate_request::ValidateRequestHandler;
