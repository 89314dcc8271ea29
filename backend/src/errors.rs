use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::storage::upload_service::UploadError;

/// What handlers return. Inference failures never reach this type; they are
/// absorbed by the fallback predictor.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    /// Rejected crop recommendation input. Reported under `error`, which is
    /// where crop clients read it.
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{context}: {detail}")]
    Internal { context: String, detail: String },
}

impl ApiError {
    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            context: context.to_string(),
            detail: err.to_string(),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::internal("Failed to process plant disease prediction", err)
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => json!({
                "success": false,
                "message": message,
            }),
            ApiError::InvalidRequest(message) => json!({
                "success": false,
                "error": message,
            }),
            ApiError::Internal { context, detail } => json!({
                "success": false,
                "message": context,
                "error": detail,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
