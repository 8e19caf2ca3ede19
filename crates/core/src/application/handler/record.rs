// Method-Record Adapter

use super::args::ArgField;
use super::method::{handler_to_method, Handler};
use crate::port::{ServiceMethod, ServiceMethods};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// A handler whose argument types are fixed but which is not adapted yet
trait PendingHandler: Send {
    fn into_method(self: Box<Self>) -> Arc<dyn ServiceMethod>;
}

struct Pending<H, Q, P, B> {
    handler: H,
    _args: PhantomData<fn() -> (Q, P, B)>,
}

impl<H, Q, P, B> PendingHandler for Pending<H, Q, P, B>
where
    H: Handler<Q, P, B>,
    Q: ArgField,
    P: ArgField,
    B: ArgField,
{
    fn into_method(self: Box<Self>) -> Arc<dyn ServiceMethod> {
        handler_to_method(self.handler)
    }
}

/// Named group of idiomatic handlers (operation name -> handler)
///
/// Each entry keeps its own argument and response types; they are erased
/// only when the set is turned into [`ServiceMethods`].
#[derive(Default)]
pub struct HandlerSet {
    handlers: HashMap<String, Box<dyn PendingHandler>>,
}

impl HandlerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under `name`, replacing any previous one
    pub fn handler<H, Q, P, B>(mut self, name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<Q, P, B>,
        Q: ArgField,
        P: ArgField,
        B: ArgField,
    {
        self.handlers.insert(
            name.into(),
            Box::new(Pending {
                handler,
                _args: PhantomData,
            }),
        );
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("HandlerSet").field("handlers", &names).finish()
    }
}

/// Adapt every handler of the set, keeping the names.
///
/// No check against any expected interface happens here; whatever names the
/// set holds come out the other side.
pub fn create_service_methods(handlers: HandlerSet) -> ServiceMethods {
    handlers
        .handlers
        .into_iter()
        .map(|(name, pending)| (name, pending.into_method()))
        .collect()
}
