// Handler-to-Method Adapter

use super::args::{ArgField, HandlerArgs};
use crate::error::{AppError, Result};
use crate::port::{MethodRequest, ResponseSink, ServiceMethod};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Outcome of an idiomatic handler: the response body or the failure
pub type HandlerResult<T> = std::result::Result<T, AppError>;

/// Idiomatic handler: one argument object in, one tagged result out
///
/// Implemented for every `Fn(HandlerArgs<Q, P, B>) -> impl Future<Output =
/// HandlerResult<R>>`, so plain `async fn`s and closures qualify.
pub trait Handler<Q, P, B>: Send + Sync + 'static {
    type Response: Serialize + Send;

    fn handle(&self, args: HandlerArgs<Q, P, B>) -> BoxFuture<'static, HandlerResult<Self::Response>>;
}

impl<F, Fut, Q, P, B, R> Handler<Q, P, B> for F
where
    F: Fn(HandlerArgs<Q, P, B>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult<R>> + Send + 'static,
    R: Serialize + Send,
{
    type Response = R;

    fn handle(&self, args: HandlerArgs<Q, P, B>) -> BoxFuture<'static, HandlerResult<R>> {
        (self)(args).boxed()
    }
}

/// A handler wearing the service-method calling convention
struct AdaptedMethod<H, Q, P, B> {
    handler: H,
    _args: PhantomData<fn() -> (Q, P, B)>,
}

#[async_trait]
impl<H, Q, P, B> ServiceMethod for AdaptedMethod<H, Q, P, B>
where
    H: Handler<Q, P, B>,
    Q: ArgField,
    P: ArgField,
    B: ArgField,
{
    async fn call(&self, request: MethodRequest, response: &mut dyn ResponseSink) -> Result<()> {
        let MethodRequest {
            query,
            params,
            body,
        } = request;
        let args = HandlerArgs::<Q, P, B>::extract(query, params, body)?;

        // Failures leave through the error channel untouched
        let value = self.handler.handle(args).await?;

        response.send(serde_json::to_value(value)?);
        Ok(())
    }
}

/// Wrap one idiomatic handler as a framework-shaped service method
pub fn handler_to_method<H, Q, P, B>(handler: H) -> Arc<dyn ServiceMethod>
where
    H: Handler<Q, P, B>,
    Q: ArgField,
    P: ArgField,
    B: ArgField,
{
    Arc::new(AdaptedMethod {
        handler,
        _args: PhantomData,
    })
}
