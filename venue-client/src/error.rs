//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client could not be constructed
    #[error("Client build error: {0}")]
    Build(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(_) => AppError::network(message),
            ClientError::Build(_) => AppError::internal(message),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                AppError::invalid_response(message)
            }
            ClientError::Unauthorized => AppError::not_authenticated(),
            ClientError::Forbidden(_) => AppError::permission_denied(message),
            ClientError::NotFound(_) => AppError::with_message(ErrorCode::NotFound, message),
            ClientError::Validation(_) => AppError::validation(message),
            ClientError::Internal(_) => AppError::internal(message),
        }
    }
}
