//! Core middleware trait and chain types.
//!
//! Middleware here is synchronous: every stage is a single pass over the
//! request with no suspension, so handlers are plain functions and the
//! chain needs no executor.

use crate::types::{Request, Response};

/// A processing stage in the request chain.
///
/// A stage either invokes the [`Next`] continuation (exactly once — `Next`
/// is consumed by [`Next::run`]) or short-circuits by returning its own
/// response without touching the continuation.
///
/// # Example
///
/// ```rust
/// use reqmodel_middleware::{Middleware, Next, Request, Response};
///
/// struct Tagging;
///
/// impl Middleware for Tagging {
///     fn name(&self) -> &'static str {
///         "tagging"
///     }
///
///     fn handle(&self, mut request: Request, next: Next<'_>) -> Response {
///         request.headers_mut().insert("x-tagged", "yes".parse().unwrap());
///         next.run(request)
///     }
/// }
/// ```
pub trait Middleware: Send + Sync {
    /// The stage's name, used for logging and debugging.
    fn name(&self) -> &'static str;

    /// Processes the request, either running the continuation or
    /// short-circuiting with a response.
    fn handle(&self, request: Request, next: Next<'_>) -> Response;
}

/// The continuation a middleware stage hands the request to.
///
/// Consumed by [`run`](Self::run), so a stage can invoke it at most once;
/// not invoking it short-circuits the chain.
pub struct Next<'a> {
    inner: NextInner<'a>,
}

enum NextInner<'a> {
    /// More middleware to process.
    Chain {
        middleware: &'a dyn Middleware,
        next: Box<Next<'a>>,
    },
    /// End of chain: the handler.
    Handler(Box<dyn FnOnce(Request) -> Response + 'a>),
}

impl<'a> Next<'a> {
    /// Creates a continuation that runs `middleware` and then `next`.
    #[must_use]
    pub fn stage(middleware: &'a dyn Middleware, next: Next<'a>) -> Self {
        Self {
            inner: NextInner::Chain {
                middleware,
                next: Box::new(next),
            },
        }
    }

    /// Creates the terminal continuation wrapping the handler.
    #[must_use]
    pub fn handler(f: impl FnOnce(Request) -> Response + 'a) -> Self {
        Self {
            inner: NextInner::Handler(Box::new(f)),
        }
    }

    /// Runs the rest of the chain.
    pub fn run(self, request: Request) -> Response {
        match self.inner {
            NextInner::Chain { middleware, next } => middleware.handle(request, *next),
            NextInner::Handler(handler) => handler(request),
        }
    }
}

/// A middleware stage defined by a plain function.
///
/// # Example
///
/// ```rust
/// use reqmodel_middleware::{FnMiddleware, Next, Request};
///
/// let logging = FnMiddleware::new("logging", |request: Request, next: Next<'_>| {
///     let path = request.uri().path().to_string();
///     let response = next.run(request);
///     assert!(!path.is_empty());
///     response
/// });
/// ```
pub struct FnMiddleware<F> {
    name: &'static str,
    func: F,
}

impl<F> FnMiddleware<F> {
    /// Creates a function-backed middleware stage.
    pub const fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(Request, Next<'_>) -> Response + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(&self, request: Request, next: Next<'_>) -> Response {
        (self.func)(request, next)
    }
}
