// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// This is also the failure half of every `HandlerResult`: whatever a handler
/// fails with is handed, unchanged, to the transport's error layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: &'static str, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error name exposed to clients
    pub fn error_name(&self) -> &'static str {
        match self {
            AppError::Domain(e) => e.error_name(),
            AppError::InvalidArgument { .. } => "InvalidArgumentError",
            AppError::Serialization(_) | AppError::Config(_) | AppError::Internal(_) => {
                "InternalServerError"
            }
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
