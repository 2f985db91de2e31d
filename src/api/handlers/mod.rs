pub mod daily_averages;
pub mod health;

use axum::http::Uri;

use crate::api::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
