//! HTTP Error Types
//!
//! The generic error layer: every failure a service method returns is turned
//! into a status code plus a JSON body here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::domain::DomainError;
use marquee_core::error::AppError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{error, warn};

/// Error body sent to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_name: String,
    pub message: String,
}

/// Map an application error to its HTTP status
pub fn status_code(err: &AppError) -> StatusCode {
    match err {
        AppError::Domain(DomainError::MovieDoesNotExist(_)) => StatusCode::NOT_FOUND,
        AppError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        AppError::Serialization(_) | AppError::Config(_) | AppError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Application error on its way out of an HTTP route
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_code(&self.0);
        let error_name = self.0.error_name().to_string();

        let message = if status.is_server_error() {
            error!(error = %self.0, error_name = %error_name, "Request failed");
            "Internal server error".to_string()
        } else {
            warn!(error = %self.0, error_name = %error_name, status = status.as_u16(), "Request rejected");
            self.0.to_string()
        };

        (
            status,
            Json(ErrorBody {
                error_name,
                message,
            }),
        )
            .into_response()
    }
}

/// Raised when a method record does not satisfy a service interface
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Service '{service}' is missing operation '{operation}'")]
    MissingOperation {
        service: &'static str,
        operation: &'static str,
    },
}

/// Server lifecycle errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid listen address {0}")]
    InvalidAddr(String),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(String),
}

impl ServerError {
    pub(crate) fn bind(addr: SocketAddr, source: std::io::Error) -> Self {
        ServerError::Bind {
            addr: addr.to_string(),
            source,
        }
    }
}
