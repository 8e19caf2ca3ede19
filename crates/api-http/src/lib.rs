//! HTTP API Layer
//!
//! Exposes Marquee service methods over HTTP: route tables per service,
//! registration onto an axum router, error-to-response mapping and the
//! server lifecycle.

pub mod cors;
pub mod dispatch;
pub mod error;
pub mod interface;
pub mod server;
pub mod shutdown;

pub use error::{ApiError, RegistrationError, ServerError};
pub use interface::imdb::ImdbService;
pub use interface::{register, Services};
pub use server::{HttpServer, HttpServerConfig, ServerHandle};
