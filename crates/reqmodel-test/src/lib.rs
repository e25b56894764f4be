//! # Reqmodel Test
//!
//! In-memory helpers for testing reqmodel middleware: a request builder
//! with query, path-param, and JSON-body support; a response wrapper with
//! assertion methods; and a continuation spy that counts how often the
//! chain proceeded.
//!
//! ## Example
//!
//! ```rust
//! use reqmodel_core::{Definition, FieldDef, FieldType};
//! use reqmodel_middleware::{Middleware, ModelMiddleware};
//! use reqmodel_test::{NextSpy, TestRequest, TestResponse};
//!
//! let middleware = ModelMiddleware::new(
//!     Definition::new().field("points", FieldDef::new(FieldType::Int).default_value(10)),
//! );
//!
//! let spy = NextSpy::new();
//! let response = TestResponse::from(
//!     middleware.handle(TestRequest::get("/").build(), spy.next()),
//! );
//!
//! response.assert_status_code(200);
//! assert_eq!(spy.calls(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/reqmodel-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod request;
mod response;
mod spy;

pub use request::{TestRequest, TestRequestBuilder};
pub use response::TestResponse;
pub use spy::NextSpy;
