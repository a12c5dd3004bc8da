//! JSON response writing and error mapping

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::dto::calculation::ErrorResponse;

/// Message returned for every decode or validation failure
pub const INCORRECT_INPUT: &str = "Incorrect input";

const INTERNAL_ERROR: &str = "Internal server error";

const TIMEOUT_ERROR: &str = "Request timed out";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A serializable body written as newline-terminated JSON
pub struct JsonResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonResponse<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(mut bytes) => {
                bytes.push(b'\n');
                json_bytes(self.status, bytes)
            }
            Err(err) => {
                error!(error = %err, "Failed to serialize response body");
                json_bytes(StatusCode::INTERNAL_SERVER_ERROR, error_body(INTERNAL_ERROR))
            }
        }
    }
}

/// Newline-terminated `ErrorResponse` bytes; a lone string field always serializes
fn error_body(message: &str) -> Vec<u8> {
    let mut bytes = serde_json::to_vec(&ErrorResponse {
        error: message.to_string(),
    })
    .unwrap_or_default();
    bytes.push(b'\n');
    bytes
}

fn json_bytes(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        bytes,
    )
        .into_response()
}

/// Failures surfaced to the HTTP client
///
/// The specific cause is logged where the error is raised; the client only
/// ever sees the generic message for the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Body could not be decoded or failed validation
    IncorrectInput,
    /// The calculation itself failed
    Internal,
    /// The request exceeded the configured timeout
    Timeout,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::IncorrectInput => (StatusCode::BAD_REQUEST, INCORRECT_INPUT),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
            ApiError::Timeout => (StatusCode::GATEWAY_TIMEOUT, TIMEOUT_ERROR),
        };

        JsonResponse::new(
            status,
            ErrorResponse {
                error: message.to_string(),
            },
        )
        .into_response()
    }
}
