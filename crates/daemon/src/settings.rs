//! Startup configuration
//!
//! The only setting is the listen port, taken from `PORT` once at startup.

use anyhow::{Context, Result};
use marquee_api_http::server::DEFAULT_PORT;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub port: u16,
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::default().try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(source)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid PORT")
    }
}
