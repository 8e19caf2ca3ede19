// Domain Error Types

use crate::domain::MovieId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Movie does not exist: {0}")]
    MovieDoesNotExist(MovieId),
}

impl DomainError {
    /// Name of the error in the service's error taxonomy
    pub fn error_name(&self) -> &'static str {
        match self {
            DomainError::MovieDoesNotExist(_) => "MovieDoesNotExistError",
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
