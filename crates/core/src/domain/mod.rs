// Domain Layer - Pure business entities

pub mod error;
pub mod movie;

// Re-exports
pub use error::DomainError;
pub use movie::{CreateMovieRequest, Movie, MovieId};
