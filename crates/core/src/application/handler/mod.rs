//! Handler Adaptation Layer
//!
//! Converts idiomatic handlers (`HandlerArgs -> HandlerResult`) into
//! framework-shaped [`ServiceMethod`](crate::port::ServiceMethod)s, one at a
//! time ([`handler_to_method`]) or for a whole named set
//! ([`create_service_methods`]).

pub mod args;
pub mod method;
pub mod record;

pub use args::{Absent, ArgField, HandlerArgs};
pub use method::{handler_to_method, Handler, HandlerResult};
pub use record::{create_service_methods, HandlerSet};
