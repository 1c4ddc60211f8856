use actix_web::{HttpResponse, ResponseError};
use sqlcamp_types::MessageResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidRequest(_) | AppError::DuplicateEmail => {
                HttpResponse::BadRequest().json(MessageResponse {
                    message: self.to_string(),
                })
            }
            AppError::InvalidCredentials => HttpResponse::Unauthorized().json(MessageResponse {
                message: self.to_string(),
            }),
            AppError::NotFound(_) => HttpResponse::NotFound().json(MessageResponse {
                message: self.to_string(),
            }),
            AppError::Database(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Internal(_) => {
                tracing::error!("accounts request failed: {}", self);
                // Internal detail stays in the logs, not on the wire.
                HttpResponse::InternalServerError().json(MessageResponse {
                    message: "Server error".to_string(),
                })
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
