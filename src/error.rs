//! Error types for the library catalog

use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes handed to front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    ItemNotBorrowed = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation collides with the current catalog state
    #[error("Conflict: {message}")]
    Conflict { code: ErrorCode, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error code reported alongside the message
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Conflict { code, .. } => *code,
            AppError::Config(_) | AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Build the serializable body shown to the user
    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Conflict { message, .. } => message.clone(),
            AppError::Config(e) => {
                tracing::error!("Configuration error: {:?}", e);
                e.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }

    /// An item with this id already exists somewhere in the catalog
    pub fn duplicate(message: impl Into<String>) -> Self {
        AppError::Conflict { code: ErrorCode::Duplicate, message: message.into() }
    }

    /// The item is currently rented
    pub fn not_available(message: impl Into<String>) -> Self {
        AppError::Conflict { code: ErrorCode::ItemNotAvailable, message: message.into() }
    }

    /// The item is not rented
    pub fn not_borrowed(message: impl Into<String>) -> Self {
        AppError::Conflict { code: ErrorCode::ItemNotBorrowed, message: message.into() }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_codes() {
        let err = AppError::not_available("Item B001 is already rented by Alice");
        assert_eq!(err.code(), ErrorCode::ItemNotAvailable);
        assert_eq!(err.to_string(), "Conflict: Item B001 is already rented by Alice");

        assert_eq!(AppError::not_borrowed("x").code(), ErrorCode::ItemNotBorrowed);
        assert_eq!(AppError::duplicate("x").code(), ErrorCode::Duplicate);
    }

    #[test]
    fn test_response_body() {
        let body = AppError::NotFound("Item X9 not found".to_string()).to_response();
        assert_eq!(body.code, 5);
        assert_eq!(body.error, "NoSuchItem");
        assert_eq!(body.message, "Item X9 not found");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let body = AppError::Internal("lock poisoned".to_string()).to_response();
        assert_eq!(body.message, "Internal error");
        assert_eq!(body.code, ErrorCode::Failure as u32);
    }
}
