use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of a gateway operation
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Input rejected before any external call
    #[error("{0}")]
    Validation(String),

    /// The mandatory translation step failed
    #[error("{0}")]
    Translation(#[source] anyhow::Error),
}

/// HTTP error response: `{"error": ..., "success": false}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    /// Map a gateway failure, prefixing dependency errors with the operation's context
    pub fn from_gateway(err: GatewayError, context: &str) -> Self {
        match err {
            GatewayError::Validation(msg) => Self::bad_request(msg),
            GatewayError::Translation(source) => {
                Self::internal(format!("{}: {}", context, source))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "success": false
        }));
        (self.status, body).into_response()
    }
}

/// Body for unmatched routes
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Page not found"}))).into_response()
}

/// Body for failures that escaped a handler; details stay in the log
pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}
