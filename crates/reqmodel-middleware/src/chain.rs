//! Ordered middleware composition.

use crate::middleware::{Middleware, Next};
use crate::types::{Request, Response};

/// An ordered stack of middleware stages run ahead of a handler.
///
/// Stages run in the order they were added; each decides whether the
/// request proceeds. A short-circuiting stage stops the chain and its
/// response is returned as-is.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use http::StatusCode;
/// use reqmodel_core::{Definition, FieldType};
/// use reqmodel_middleware::{MiddlewareChain, ModelMiddleware};
///
/// let chain = MiddlewareChain::new()
///     .with(ModelMiddleware::new(
///         Definition::new().field("customer", FieldType::String),
///     ));
///
/// let request = http::Request::builder()
///     .uri("/?customer=dan")
///     .body(Bytes::new())
///     .unwrap();
///
/// let response = chain.handle(request, |_req| {
///     http::Response::builder()
///         .status(StatusCode::OK)
///         .body(Bytes::new())
///         .unwrap()
/// });
/// assert_eq!(response.status(), StatusCode::OK);
/// ```
#[derive(Default)]
pub struct MiddlewareChain {
    stages: Vec<Box<dyn Middleware>>,
}

impl MiddlewareChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the chain.
    #[must_use]
    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.stages.push(Box::new(middleware));
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the chain has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the request through every stage and, if none short-circuits,
    /// the handler.
    pub fn handle(
        &self,
        request: Request,
        handler: impl FnOnce(Request) -> Response,
    ) -> Response {
        let mut next = Next::handler(handler);
        for middleware in self.stages.iter().rev() {
            next = Next::stage(middleware.as_ref(), next);
        }
        next.run(request)
    }
}
