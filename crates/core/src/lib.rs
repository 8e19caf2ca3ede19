// Marquee Core - Handler Adaptation & Domain
// NO HTTP framework dependencies: the transport only sees the ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
