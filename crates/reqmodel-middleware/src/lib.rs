//! # Reqmodel Middleware
//!
//! The middleware layer for reqmodel: a synchronous request-processing
//! chain and the [`ModelMiddleware`] entry point that extracts, coerces,
//! defaults, and validates declared request parameters.
//!
//! On success the resolved model rides the request's extensions (under a
//! configurable output name, `"model"` by default) and the continuation is
//! invoked exactly once. On any failure — broken definition, missing
//! required field, enum violation, failed validation — the continuation is
//! not invoked and the response is status 400 with the failure message as
//! its plain-text body.
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use http::StatusCode;
//! use reqmodel_core::{Definition, FieldDef, FieldType};
//! use reqmodel_middleware::{
//!     MiddlewareChain, ModelMiddleware, RequestModelExt, DEFAULT_OUTPUT,
//! };
//!
//! let chain = MiddlewareChain::new().with(ModelMiddleware::new(
//!     Definition::new()
//!         .field("customer", FieldType::String)
//!         .field("points", FieldDef::new(FieldType::Int).default_value(10)),
//! ));
//!
//! let request = http::Request::builder()
//!     .uri("/rewards?customer=dan")
//!     .body(Bytes::new())
//!     .unwrap();
//!
//! let response = chain.handle(request, |req| {
//!     let model = req.model(DEFAULT_OUTPUT).unwrap();
//!     assert_eq!(model.str_of("customer"), Some("dan"));
//!     assert_eq!(model.int_of("points"), Some(10));
//!     http::Response::builder()
//!         .status(StatusCode::OK)
//!         .body(Bytes::new())
//!         .unwrap()
//! });
//! assert_eq!(response.status(), StatusCode::OK);
//! ```

#![doc(html_root_url = "https://docs.rs/reqmodel-middleware/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapt;
mod chain;
mod middleware;
mod model;
mod path;
mod types;

pub use adapt::request_parts;
pub use chain::MiddlewareChain;
pub use middleware::{FnMiddleware, Middleware, Next};
pub use model::{ModelMiddleware, ModelSet, RequestModelExt, DEFAULT_OUTPUT};
pub use path::PathParams;
pub use types::{Request, Response, ResponseExt};
