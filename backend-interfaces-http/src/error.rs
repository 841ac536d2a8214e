use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use backend_application::AppError;
use backend_domain::{FieldError, ValidationError};

#[derive(Debug)]
pub enum HttpError {
    Validation(ValidationError),
    NotFound(String),
    /// Detail has already been logged where the failure happened.
    Internal,
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            err @ AppError::NotFound { .. } => HttpError::NotFound(err.to_string()),
            AppError::Internal(_) => HttpError::Internal,
        }
    }
}

impl From<ValidationError> for HttpError {
    fn from(value: ValidationError) -> Self {
        HttpError::Validation(value)
    }
}

impl From<PathRejection> for HttpError {
    fn from(value: PathRejection) -> Self {
        HttpError::Validation(ValidationError::single("id", value.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "invalid payload".to_string(),
                    fields: Some(err.fields),
                },
            ),
            HttpError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: message,
                    fields: None,
                },
            ),
            HttpError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "internal server error".to_string(),
                    fields: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
