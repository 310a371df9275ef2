use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Uniform wrapper for every API response.
///
/// `success` mirrors whether the status is 2xx, `message` is a single
/// human-readable string, and `result` is the payload or null. A payload
/// must be a single named bundle (a JSON object), never a bare list or
/// scalar.
#[derive(Debug, Serialize, Clone)]
pub struct Envelope {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Value>,
}

/// Handler return type carrying the envelope and its HTTP status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    envelope: Envelope,
}

impl ApiResponse {
    fn build(data: Option<Value>, status: StatusCode, message: String) -> Self {
        if let Some(data) = &data {
            // Passing a bare list or scalar is a bug in the handler, not a
            // client error
            assert!(
                data.is_object(),
                "envelope payload must be a JSON object, got: {data}"
            );
        }

        Self {
            status,
            envelope: Envelope {
                code: status.as_u16(),
                success: status.is_success(),
                message,
                result: data,
            },
        }
    }

    /// 200 response carrying a payload
    pub fn data(data: Value) -> Self {
        Self::build(Some(data), StatusCode::OK, String::new())
    }

    /// Payload with an explicit status, e.g. 201 on create
    pub fn with_status(data: Value, status: StatusCode) -> Self {
        Self::build(Some(data), status, String::new())
    }

    /// Status and message with no payload
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::build(None, status, message.into())
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
