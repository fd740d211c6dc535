//! Service error types

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the train and predict operations
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid request. Missing file_content.")]
    MissingPayload,

    #[error("Invalid payload: {0}")]
    Payload(String),

    #[error("{0}")]
    Schema(String),

    #[error("{0}")]
    Data(String),

    #[error("Model is not loaded. Please train the model first.")]
    NotReady,

    #[error("{0}")]
    Fit(String),

    #[error("{0}")]
    Internal(String),

    #[error("Model artifact I/O failed: {0}")]
    Io(String),
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// JSON error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingPayload
            | ServiceError::Payload(_)
            | ServiceError::Schema(_)
            | ServiceError::Data(_)
            | ServiceError::NotReady => StatusCode::BAD_REQUEST,
            ServiceError::Fit(_) | ServiceError::Internal(_) | ServiceError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
