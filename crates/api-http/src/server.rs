//! HTTP Server
//!
//! Serves the registered services over TCP with CORS and request tracing.

use crate::cors::build_cors_layer;
use crate::error::ServerError;
use crate::interface::{register, Services};
use crate::shutdown::{shutdown_channel, ShutdownSender};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ServerError::InvalidAddr(addr))
    }
}

/// Build the application router: all service routes plus middleware
pub fn app(services: Services) -> Router {
    register(Router::new(), services)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    services: Services,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, services: Services) -> Self {
        Self { config, services }
    }

    /// Bind the listener and start serving in a background task
    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let addr = self.config.socket_addr()?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::bind(addr, e))?;
        let local_addr = listener.local_addr()?;

        info!(
            host = %self.config.host,
            port = local_addr.port(),
            "Starting HTTP server"
        );

        let (shutdown, mut token) = shutdown_channel();
        let router = app(self.services);

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { token.wait().await })
                .await
        });

        Ok(ServerHandle {
            local_addr,
            shutdown,
            task,
        })
    }
}

/// Handle to a running server
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: ShutdownSender,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Address the server actually listens on (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(self) -> Result<(), ServerError> {
        self.shutdown.shutdown();
        self.task
            .await
            .map_err(|e| ServerError::Join(e.to_string()))??;
        info!("HTTP server stopped");
        Ok(())
    }
}
