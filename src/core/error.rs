use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Fixed message for missing or invalid object-storage credentials.
pub const CREDENTIALS_FAILURE_DETAIL: &str = "Invalid storage credentials";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", CREDENTIALS_FAILURE_DETAIL)]
    Credentials,

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Internal(String),
}

/// Wire shape of every error response: `{"detail": <string>}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure aborts the request with a 500; credential failures
        // and generic failures differ only in message text.
        match &self {
            AppError::Credentials => tracing::error!("storage credential failure"),
            AppError::Database(e) => tracing::error!("database error: {}", e),
            AppError::Storage(msg) => tracing::error!("storage error: {}", msg),
            AppError::Upload(msg) => tracing::error!("upload error: {}", msg),
            AppError::Internal(msg) => tracing::error!("internal error: {}", msg),
        }

        let body = Json(ErrorBody {
            detail: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
