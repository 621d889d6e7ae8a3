use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::order::IntakeError;
use crate::domain::transaction::LogError;

// ============================================================================
// API Errors
// ============================================================================
//
// Callers only ever see a generic message. The detailed cause is logged by
// the handler before it is collapsed into one of these.
//
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid request")]
    InvalidRequest,

    #[error("Failed to log transaction")]
    TransactionLogFailed,

    #[error("Failed to create transaction log")]
    InjectedFailure,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::TransactionLogFailed | ApiError::InjectedFailure => {
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

impl From<IntakeError> for ApiError {
    fn from(e: IntakeError) -> Self {
        match e {
            IntakeError::Decode(_) | IntakeError::Invalid(_) => ApiError::InvalidRequest,
            IntakeError::Downstream(_) => ApiError::TransactionLogFailed,
        }
    }
}

impl From<LogError> for ApiError {
    fn from(e: LogError) -> Self {
        match e {
            LogError::InjectedFailure => ApiError::InjectedFailure,
            LogError::Decode(_) | LogError::Invalid(_) => ApiError::InvalidRequest,
        }
    }
}
