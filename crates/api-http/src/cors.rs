use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer.
///
/// Every origin is allowed, with the usual verb set and any request header.
/// Credentials are not allowed, which is what makes the wildcard origin legal.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
