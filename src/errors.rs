use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ProviderError(String),

    #[error("{0}")]
    MalformedOutput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::ProviderError(_) => "PROVIDER_ERROR",
            AppError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

/// Body for 400 responses: the caller is told which fields were missing.
#[derive(Debug, Serialize)]
pub struct BadRequestResponse {
    pub error: String,
}

/// Body for every downstream failure. Provider and parsing failures look the same on the wire.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderError(_)
            | AppError::MalformedOutput(_)
            | AppError::Configuration(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(message) => {
                HttpResponse::BadRequest().json(BadRequestResponse {
                    error: message.clone(),
                })
            }
            _ => {
                log::debug!("responding with {} ({})", self.error_code(), self);
                HttpResponse::build(self.status_code()).json(ErrorEnvelope {
                    success: false,
                    error: format!("Server Error: {}", self),
                })
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedOutput(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
