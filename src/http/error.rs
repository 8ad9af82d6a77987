//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::dto::ErrorBody;
use crate::error::KalamError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct AppError(pub KalamError);

impl AppError {
    /// Lookup failures are the caller's problem (400); anything else is ours (500)
    pub fn status(&self) -> StatusCode {
        if self.0.is_upstream() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {} ({})", self.0, self.0.error_code());
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<KalamError> for AppError {
    fn from(err: KalamError) -> Self {
        AppError(err)
    }
}
