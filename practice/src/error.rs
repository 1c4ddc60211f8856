use actix_web::{HttpResponse, ResponseError};
use sqlcamp_types::PracticeErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timed out waiting for a practice database connection")]
    PoolTimeout,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = PracticeErrorResponse::new(self.to_string());

        match self {
            // Connectivity failures get logged apart from ordinary statement
            // errors, which never reach this impl (they are Failure outcomes).
            AppError::Database(_) | AppError::PoolTimeout => {
                tracing::error!("practice store unavailable: {}", self);
                HttpResponse::InternalServerError().json(body)
            }
            AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
