//! API Gateway response envelopes.
//!
//! The HTTP-fronted handlers never raise to the invocation harness; every
//! outcome becomes an [`ApiGatewayProxyResponse`]. Success responses carry
//! a JSON body directly; failures carry an [`ErrorEnvelope`].

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use serde::Serialize;

/// Error detail carried inside an [`ErrorEnvelope`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

/// Body of a non-2xx response.
///
/// # Examples
///
/// ```
/// use onboarding_flow::types::{ErrorBody, ErrorEnvelope};
///
/// let envelope = ErrorEnvelope {
///     http_status_code: 400,
///     response_body: "Request body not valid".to_string(),
///     error: ErrorBody { error_message: "requestId is empty".to_string() },
/// };
///
/// let json = serde_json::to_value(&envelope).unwrap();
/// assert_eq!(json["httpStatusCode"], 400);
/// assert_eq!(json["error"]["errorMessage"], "requestId is empty");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// The HTTP status, repeated in the body.
    pub http_status_code: u16,

    /// Short response title (e.g. `"Request body not valid"`).
    pub response_body: String,

    /// The failure detail.
    pub error: ErrorBody,
}

/// Builds a JSON response with the given status and pre-serialized body.
pub fn json_response(status_code: u16, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status_code),
        headers: default_headers(),
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    }
}

/// Builds an error response wrapping the message in an [`ErrorEnvelope`].
pub fn error_response(
    status_code: u16,
    response_body: &str,
    error_message: &str,
) -> ApiGatewayProxyResponse {
    let envelope = ErrorEnvelope {
        http_status_code: status_code,
        response_body: response_body.to_string(),
        error: ErrorBody {
            error_message: error_message.to_string(),
        },
    };

    // The envelope contains only strings and a number; serialization
    // cannot fail, but fall back to the title rather than panic.
    let body = serde_json::to_string(&envelope)
        .unwrap_or_else(|_| format!("{{\"responseBody\":\"{response_body}\"}}"));

    json_response(status_code, body)
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
