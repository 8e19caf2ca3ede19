//! Service Interfaces
//!
//! Each service declares its operations (name, verb, path). A service value
//! can only be built from a method record that covers every declared
//! operation; registration then wires one route per operation.

pub mod imdb;

use crate::dispatch::{dispatch, dispatch_with_params};
use crate::error::RegistrationError;
use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use marquee_core::port::{ServiceMethod, ServiceMethods};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP verb of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Delete => MethodFilter::DELETE,
        }
    }
}

/// Declared operation of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub verb: Verb,
    /// axum path template, e.g. `/movies/{movieId}`
    pub path: &'static str,
}

impl OperationSpec {
    fn has_params(&self) -> bool {
        self.path.contains('{')
    }
}

/// An operation paired with the method that serves it
#[derive(Clone)]
pub struct BoundOperation {
    pub spec: OperationSpec,
    pub method: Arc<dyn ServiceMethod>,
}

impl std::fmt::Debug for BoundOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundOperation")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Match a method record against declared operations
///
/// Every declared operation must be present. Extra entries are ignored.
pub fn bind_operations(
    service: &'static str,
    operations: &[OperationSpec],
    methods: &ServiceMethods,
) -> Result<Vec<BoundOperation>, RegistrationError> {
    let bound = operations
        .iter()
        .map(|spec| {
            methods
                .get(spec.name)
                .map(|method| BoundOperation {
                    spec: *spec,
                    method,
                })
                .ok_or(RegistrationError::MissingOperation {
                    service,
                    operation: spec.name,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for name in methods.names() {
        if !operations.iter().any(|spec| spec.name == name) {
            warn!(service, operation = name, "Ignoring undeclared operation");
        }
    }

    Ok(bound)
}

fn method_router(op: &BoundOperation) -> MethodRouter {
    let method = op.method.clone();
    if op.spec.has_params() {
        on(
            op.spec.verb.filter(),
            move |params: Path<HashMap<String, String>>,
                  query: Query<HashMap<String, String>>,
                  body: Bytes| dispatch_with_params(method.clone(), params, query, body),
        )
    } else {
        on(
            op.spec.verb.filter(),
            move |query: Query<HashMap<String, String>>, body: Bytes| {
                dispatch(method.clone(), query, body)
            },
        )
    }
}

/// All services served by the application
#[derive(Debug, Clone)]
pub struct Services {
    pub imdb: imdb::ImdbService,
}

/// Wire every operation of every service onto the router
pub fn register(router: Router, services: Services) -> Router {
    let mut router = router;

    for op in services.imdb.operations() {
        debug!(
            service = imdb::SERVICE_NAME,
            operation = op.spec.name,
            path = op.spec.path,
            "Registering route"
        );
        router = router.route(op.spec.path, method_router(op));
    }

    router
}
