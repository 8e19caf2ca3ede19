// Application Layer - Handler adaptation and the demo service

pub mod handler;
pub mod imdb;

// Re-exports
pub use handler::{
    create_service_methods, handler_to_method, Absent, HandlerArgs, HandlerResult, HandlerSet,
};
