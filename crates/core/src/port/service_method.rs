// Service Method Port (Interface)
//
// The framework-shaped calling convention: a method receives the raw request
// pieces plus a sink to send the response into. Route registration only ever
// deals with this shape.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Raw request as handed over by the routing layer
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRequest {
    /// Query string as a JSON object
    pub query: Value,
    /// Path parameters as a JSON object
    pub params: Value,
    /// Decoded request body (`null` when empty)
    pub body: Value,
}

impl MethodRequest {
    pub fn new(query: Value, params: Value, body: Value) -> Self {
        Self {
            query,
            params,
            body,
        }
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.query = query;
        self
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }
}

impl Default for MethodRequest {
    fn default() -> Self {
        Self {
            query: Value::Object(Map::new()),
            params: Value::Object(Map::new()),
            body: Value::Null,
        }
    }
}

/// Response capability passed to a service method
#[cfg_attr(test, mockall::automock)]
pub trait ResponseSink: Send {
    /// Send the response body
    fn send(&mut self, body: Value);
}

/// Framework-shaped service method
#[async_trait]
pub trait ServiceMethod: Send + Sync {
    /// Handle one request.
    ///
    /// Errors are not written to `response`; they are returned for the
    /// transport's error layer to translate.
    async fn call(&self, request: MethodRequest, response: &mut dyn ResponseSink) -> Result<()>;
}

/// Named collection of service methods (operation name -> method)
#[derive(Clone, Default)]
pub struct ServiceMethods {
    methods: HashMap<String, Arc<dyn ServiceMethod>>,
}

impl ServiceMethods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a method, replacing any previous one under the same name
    pub fn insert(&mut self, name: impl Into<String>, method: Arc<dyn ServiceMethod>) {
        self.methods.insert(name.into(), method);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ServiceMethod>> {
        self.methods.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl std::fmt::Debug for ServiceMethods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("ServiceMethods")
            .field("methods", &names)
            .finish()
    }
}

impl FromIterator<(String, Arc<dyn ServiceMethod>)> for ServiceMethods {
    fn from_iter<I: IntoIterator<Item = (String, Arc<dyn ServiceMethod>)>>(iter: I) -> Self {
        Self {
            methods: iter.into_iter().collect(),
        }
    }
}
