//! IMDb service interface

use super::{bind_operations, BoundOperation, OperationSpec, Verb};
use crate::error::RegistrationError;
use marquee_core::application::imdb::operation;
use marquee_core::port::ServiceMethods;

pub const SERVICE_NAME: &str = "imdb";

/// Declared operations of the IMDb service
pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: operation::GET_MOVIE,
        verb: Verb::Get,
        path: "/movies/{movieId}",
    },
    OperationSpec {
        name: operation::CREATE_MOVIE,
        verb: Verb::Post,
        path: "/movies/create-movie",
    },
];

/// IMDb service bound to its methods
#[derive(Debug, Clone)]
pub struct ImdbService {
    operations: Vec<BoundOperation>,
}

impl ImdbService {
    /// Build the service from a method record.
    ///
    /// Fails if any declared operation is missing from `methods`.
    pub fn new(methods: ServiceMethods) -> Result<Self, RegistrationError> {
        Ok(Self {
            operations: bind_operations(SERVICE_NAME, OPERATIONS, &methods)?,
        })
    }

    pub fn operations(&self) -> &[BoundOperation] {
        &self.operations
    }
}
