use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use std::fmt;
use thiserror::Error;

/// Failure reported by a user store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Failure of one stage of a queue send.
///
/// The variant records which stage failed; the payload is the broker's message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagingError {
    #[error("failed to open connection: {0}")]
    Connect(String),

    #[error("failed to open session: {0}")]
    Session(String),

    #[error("failed to send message: {0}")]
    Send(String),

    #[error("failed to close {resource}: {message}")]
    Close {
        resource: &'static str,
        message: String,
    },
}

/// Errors surfaced at the HTTP boundary.
///
/// Both variants answer with an empty body; details only go to the log.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not Found"),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!("User store failure: {}", err);
        ApiError::InternalServerError(err.to_string())
    }
}
