//! Route Dispatch
//!
//! Turns an HTTP request into a `MethodRequest`, calls the service method
//! with an HTTP response sink, and turns the outcome back into a response.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::error::AppError;
use marquee_core::port::{MethodRequest, ResponseSink, ServiceMethod};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Response sink backed by an HTTP response
#[derive(Debug, Default)]
pub struct HttpResponseSink {
    body: Option<Value>,
}

impl ResponseSink for HttpResponseSink {
    fn send(&mut self, body: Value) {
        self.body = Some(body);
    }
}

impl IntoResponse for HttpResponseSink {
    fn into_response(self) -> Response {
        match self.body {
            None | Some(Value::Null) => StatusCode::NO_CONTENT.into_response(),
            Some(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}

fn to_object(pairs: HashMap<String, String>) -> Value {
    Value::Object(
        pairs
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<String, Value>>(),
    )
}

fn decode_body(body: &Bytes) -> Result<Value, AppError> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidArgument {
        field: "body",
        message: e.to_string(),
    })
}

/// Invoke a service method with raw HTTP pieces
pub async fn invoke(
    method: Arc<dyn ServiceMethod>,
    params: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = MethodRequest::new(to_object(query), to_object(params), decode_body(&body)?);

    let mut sink = HttpResponseSink::default();
    method.call(request, &mut sink).await?;

    Ok(sink.into_response())
}

/// Route handler for paths with parameters
pub async fn dispatch_with_params(
    method: Arc<dyn ServiceMethod>,
    Path(params): Path<HashMap<String, String>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    invoke(method, params, query, body).await
}

/// Route handler for static paths
pub async fn dispatch(
    method: Arc<dyn ServiceMethod>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    invoke(method, HashMap::new(), query, body).await
}
