//! Continuation spy.

use bytes::Bytes;
use http::StatusCode;
use reqmodel_middleware::Next;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how often a middleware invoked its continuation.
///
/// Each [`next`](Self::next) call hands out a fresh terminal continuation
/// that bumps the shared counter and answers 200 OK.
///
/// # Example
///
/// ```rust
/// use reqmodel_test::NextSpy;
///
/// let spy = NextSpy::new();
/// assert_eq!(spy.calls(), 0);
///
/// let response = spy.next().run(
///     http::Request::builder().uri("/").body(bytes::Bytes::new()).unwrap(),
/// );
/// assert_eq!(response.status(), 200);
/// assert_eq!(spy.calls(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NextSpy {
    calls: Arc<AtomicUsize>,
}

impl NextSpy {
    /// Creates a spy with a zeroed counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How often a continuation from this spy has run.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A terminal continuation that counts its invocation and responds
    /// 200 OK.
    #[must_use]
    pub fn next(&self) -> Next<'static> {
        let calls = self.calls.clone();
        Next::handler(move |_request| {
            calls.fetch_add(1, Ordering::SeqCst);
            http::Response::builder()
                .status(StatusCode::OK)
                .body(Bytes::new())
                .expect("failed to build spy response")
        })
    }
}
