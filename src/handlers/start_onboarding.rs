//! HTTP entry point that starts an onboarding execution.
//!
//! Parses the API Gateway body, validates the required fields, builds the
//! execution input the workflow will carry, and starts the state machine.
//! Every outcome is an HTTP response; nothing propagates to the harness.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use chrono::Utc;
use serde_json::json;

use crate::constants::{API_DATE_FORMAT, BAD_REQUEST_BODY, INTERNAL_ERROR_BODY};
use crate::signal::WorkflowSignaler;
use crate::store::StepStatus;
use crate::types::{
    error_response, json_response, AdditionalInfo, OnboardingInput, OnboardingRequest,
};

/// Handler core for the `start-onboarding` Lambda.
pub struct StartOnboardingHandler {
    signaler: Arc<dyn WorkflowSignaler>,
}

impl StartOnboardingHandler {
    /// Creates a handler over the given signaler.
    pub fn new(signaler: Arc<dyn WorkflowSignaler>) -> Self {
        Self { signaler }
    }

    /// Processes one HTTP request.
    ///
    /// - 400 when the body is not valid JSON or `requestId`,
    ///   `requestName`, `TPP`, or `type` is missing (the string fields
    ///   must also be non-empty).
    /// - 500 when the execution cannot be started.
    /// - 200 with the execution input plus `stepFunctionExecutionArn`
    ///   otherwise.
    pub async fn handle(&self, request: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let body = request.body.as_deref().unwrap_or_default();
        tracing::debug!(body, "onboarding request received");

        let parsed: OnboardingRequest = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "request body failed to parse");
                return error_response(400, BAD_REQUEST_BODY, "request body is not valid JSON");
            },
        };

        let (request_id, request_name, tpp, request_type) = match validate(&parsed) {
            Ok(fields) => fields,
            Err(message) => {
                tracing::warn!(message, "onboarding request rejected");
                return error_response(400, BAD_REQUEST_BODY, message);
            },
        };

        let today = Utc::now().format(API_DATE_FORMAT).to_string();
        let input = OnboardingInput {
            request_id: Some(request_id.to_string()),
            request_name: Some(request_name.to_string()),
            created_at: Some(today.clone()),
            request_email: Some(derive_email(request_name)),
            tpp: Some(tpp.to_string()),
            additional_info: Some(AdditionalInfo { client_bank: true }),
            request_type: Some(request_type.to_string()),
            request_status: Some(StepStatus::Pending.to_string()),
            updated_at: Some(today),
        };

        // The input serializes to plain strings and a flag; failure here
        // would be a programming error, surfaced as a 500.
        let input_json = match serde_json::to_string(&input) {
            Ok(serialized) => serialized,
            Err(err) => {
                return error_response(500, INTERNAL_ERROR_BODY, &err.to_string());
            },
        };

        match self.signaler.start_execution(&input_json).await {
            Ok(execution_arn) => {
                tracing::info!(request_id, execution_arn = %execution_arn, "execution started");

                let mut response_body =
                    serde_json::to_value(&input).unwrap_or_else(|_| json!({}));
                response_body["stepFunctionExecutionArn"] = json!(execution_arn);
                json_response(200, response_body.to_string())
            },
            Err(err) => {
                tracing::error!(error = %err, "failed to start execution");
                error_response(
                    500,
                    INTERNAL_ERROR_BODY,
                    &format!("Failed to invoke Step Function: {err}"),
                )
            },
        }
    }
}

/// Extracts the four required fields, rejecting absent or empty values.
fn validate(request: &OnboardingRequest) -> Result<(&str, &str, &str, &str), &'static str> {
    let request_id = require(request.request_id.as_deref())?;
    let request_name = require(request.request_name.as_deref())?;
    let tpp = request
        .tpp
        .as_deref()
        .ok_or("required onboarding fields are missing or empty")?;
    let request_type = require(request.request_type.as_deref())?;
    Ok((request_id, request_name, tpp, request_type))
}

fn require(field: Option<&str>) -> Result<&str, &'static str> {
    field
        .filter(|value| !value.is_empty())
        .ok_or("required onboarding fields are missing or empty")
}

/// Derives the contact email by stripping whitespace from the name.
fn derive_email(request_name: &str) -> String {
    let compact: String = request_name.split_whitespace().collect();
    format!("{compact}@example.com")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::recording::{RecordedCall, RecordingSignaler};
    use aws_lambda_events::encodings::Body;

    fn request_with_body(body: &str) -> ApiGatewayProxyRequest {
        ApiGatewayProxyRequest {
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    fn response_json(response: &ApiGatewayProxyResponse) -> serde_json::Value {
        let Some(Body::Text(ref body)) = response.body else {
            panic!("expected a text body");
        };
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn valid_request_starts_execution() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = StartOnboardingHandler::new(signaler.clone());

        let response = handler
            .handle(request_with_body(
                r#"{"requestId":"r1","requestName":"Alice Smith","TPP":"5","type":"A"}"#,
            ))
            .await;

        assert_eq!(response.status_code, 200);
        let body = response_json(&response);
        assert_eq!(body["requestId"], "r1");
        assert_eq!(body["requestEmail"], "AliceSmith@example.com");
        assert_eq!(body["requestStatus"], "Pending");
        assert_eq!(body["additionalInfo"]["clientBank"], true);
        assert!(body["stepFunctionExecutionArn"]
            .as_str()
            .unwrap()
            .starts_with("arn:aws:states:"));

        // The execution input matches the response body sans the ARN.
        let calls = signaler.calls();
        assert_eq!(calls.len(), 1);
        let RecordedCall::StartExecution { ref input } = calls[0] else {
            panic!("expected a start_execution call");
        };
        let input_json: serde_json::Value = serde_json::from_str(input).unwrap();
        assert_eq!(input_json["requestId"], "r1");
        assert!(input_json.get("stepFunctionExecutionArn").is_none());
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = StartOnboardingHandler::new(signaler.clone());

        let response = handler
            .handle(request_with_body(r#"{"requestName":"Alice","TPP":"5","type":"A"}"#))
            .await;

        assert_eq!(response.status_code, 400);
        assert_eq!(response_json(&response)["responseBody"], BAD_REQUEST_BODY);
        assert!(signaler.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_string_field_is_bad_request() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = StartOnboardingHandler::new(signaler);

        let response = handler
            .handle(request_with_body(
                r#"{"requestId":"","requestName":"Alice","TPP":"5","type":"A"}"#,
            ))
            .await;

        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let signaler = Arc::new(RecordingSignaler::new());
        let handler = StartOnboardingHandler::new(signaler);

        let response = handler.handle(request_with_body("not json")).await;
        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn execution_failure_is_internal_error() {
        let signaler = Arc::new(RecordingSignaler::new());
        signaler.fail_start_execution();
        let handler = StartOnboardingHandler::new(signaler);

        let response = handler
            .handle(request_with_body(
                r#"{"requestId":"r1","requestName":"Alice","TPP":"5","type":"A"}"#,
            ))
            .await;

        assert_eq!(response.status_code, 500);
        let body = response_json(&response);
        assert!(body["error"]["errorMessage"]
            .as_str()
            .unwrap()
            .starts_with("Failed to invoke Step Function:"));
    }

    #[test]
    fn email_derivation_strips_all_whitespace() {
        assert_eq!(derive_email("Alice  van  Dyk"), "AlicevanDyk@example.com");
        assert_eq!(derive_email("Bob"), "Bob@example.com");
    }
}
