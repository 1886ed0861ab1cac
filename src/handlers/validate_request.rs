//! HTTP entry point that persists a validated submission.
//!
//! Parses the API Gateway body, validates the required fields, reformats
//! the submission timestamps to the stored date format, and writes the
//! record. Every outcome is an HTTP response; nothing propagates to the
//! harness.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use chrono::NaiveDateTime;

use crate::constants::{
    API_DATE_FORMAT, BAD_REQUEST_BODY, INTERNAL_ERROR_BODY, SUBMISSION_TIMESTAMP_FORMAT,
};
use crate::store::{OnboardingStore, SubmissionRecord};
use crate::types::{error_response, json_response, OnboardingSubmission};

/// Handler core for the `validate-request` Lambda.
pub struct ValidateRequestHandler {
    store: Arc<dyn OnboardingStore>,
}

impl ValidateRequestHandler {
    /// Creates a handler over the given store.
    pub fn new(store: Arc<dyn OnboardingStore>) -> Self {
        Self { store }
    }

    /// Processes one HTTP request.
    ///
    /// - 400 when the body is not valid JSON, a required field is missing
    ///   or empty, or a timestamp does not parse.
    /// - 500 when the store write fails.
    /// - 200 with the stored record otherwise.
    pub async fn handle(&self, request: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let body = request.body.as_deref().unwrap_or_default();
        tracing::debug!(body, "submission received");

        let parsed: OnboardingSubmission = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "submission body failed to parse");
                return error_response(400, BAD_REQUEST_BODY, "request body is not valid JSON");
            },
        };

        let record = match build_record(&parsed) {
            Ok(record) => record,
            Err(message) => {
                tracing::warn!(message = %message, "submission rejected");
                return error_response(400, BAD_REQUEST_BODY, &message);
            },
        };

        if let Err(err) = self.store.put_submission(&record).await {
            tracing::error!(error = %err, "failed to persist submission");
            return error_response(500, INTERNAL_ERROR_BODY, &err.to_string());
        }

        tracing::info!(request_id = %record.request_id, "submission persisted");

        match serde_json::to_string(&record) {
            Ok(body) => json_response(200, body),
            Err(err) => error_response(500, INTERNAL_ERROR_BODY, &err.to_string()),
        }
    }
}

/// Validates the submission and produces the record to persist.
fn build_record(submission: &OnboardingSubmission) -> Result<SubmissionRecord, String> {
    let request_id = require("requestId", submission.request_id.as_deref())?;
    let request_email = require("requestEmail", submission.request_email.as_deref())?;
    let request_name = require("requestName", submission.request_name.as_deref())?;
    let request_type = require("type", submission.request_type.as_deref())?;
    let request_status = submission
        .request_status
        .as_deref()
        .ok_or("field 'requestStatus' is missing")?;
    let tpp = submission.tpp.as_deref().ok_or("field 'TPP' is missing")?;

    Ok(SubmissionRecord {
        request_id: request_id.to_string(),
        created_at: reformat_timestamp("createdAt", submission.created_at.as_deref())?,
        request_email: request_email.to_string(),
        request_name: request_name.to_string(),
        request_status: request_status.to_string(),
        tpp: tpp.to_string(),
        request_type: request_type.to_string(),
        updated_at: reformat_timestamp("updatedAt", submission.updated_at.as_deref())?,
        additional_info: submission.additional_info,
    })
}

fn require<'a>(name: &str, field: Option<&'a str>) -> Result<&'a str, String> {
    field
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("field '{name}' is missing or empty"))
}

/// Converts a submission timestamp to the stored date format.
fn reformat_timestamp(name: &str, value: Option<&str>) -> Result<String, String> {
    let raw = value.ok_or_else(|| format!("field '{name}' is missing"))?;
    let parsed = NaiveDateTime::parse_from_str(raw, SUBMISSION_TIMESTAMP_FORMAT)
        .map_err(|_| format!("field '{name}' is not a valid timestamp: {raw}"))?;
    Ok(parsed.format(API_DATE_FORMAT).to_string())
}
