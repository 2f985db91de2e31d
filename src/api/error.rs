use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for every upstream or aggregation failure. The cause is
/// logged, never sent to the client.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch or process data";

#[derive(Debug)]
pub enum ApiError {
    UpstreamFailure(String),
    NotFound(String),
}

impl ApiError {
    pub fn upstream_failure(err: impl std::fmt::Display) -> Self {
        Self::UpstreamFailure(err.to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::UpstreamFailure(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::UpstreamFailure(cause) = &self {
            tracing::error!("Daily averages request failed: {}", cause);
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
