//! Fixed strings and formats shared across the handlers.

/// Prefix applied to the caller's request identifier to form the step key.
pub const STEP_ID_PREFIX: &str = "step-";

/// The workflow step a persisted token belongs to.
pub const STEP_NAME: &str = "Register Onboarding Request";

/// Returned by the registrar once the token is persisted. The token and
/// payload are deliberately not echoed back.
pub const REGISTRAR_SUCCESS_MESSAGE: &str =
    "Task token saved successfully. Awaiting external trigger.";

/// Returned by the resolver when the event carries no usable token.
pub const RESOLVER_MISSING_TOKEN_MESSAGE: &str = "Task failed: Missing or empty TaskToken";

/// Default table for persisted task tokens, overridable via `STEP_RESULTS_TABLE`.
pub const DEFAULT_STEP_RESULTS_TABLE: &str = "step_results";

/// Default table for validated submissions, overridable via `ONBOARDING_TABLE`.
pub const DEFAULT_ONBOARDING_TABLE: &str = "onboarding_request";

/// Response body title for 400 responses.
pub const BAD_REQUEST_BODY: &str = "Request body not valid";

/// Response body title for 500 responses.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Timestamp format for a step record's `created` attribute.
pub const STEP_CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used in execution inputs and persisted submissions.
pub const API_DATE_FORMAT: &str = "%d-%m-%Y";

/// Timestamp format submissions arrive with (`createdAt`/`updatedAt`).
pub const SUBMISSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
