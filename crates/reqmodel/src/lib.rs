//! # Reqmodel
//!
//! **Declarative extraction, coercion, and validation of request
//! parameters.**
//!
//! Reqmodel lets an endpoint declare the parameters it expects — their
//! types, lookup sources, defaults, allowed values, and custom validation —
//! and turns an incoming request into a plain, immutable model for the
//! handler:
//!
//! - 🔎 **Three sources, one scan** – path params, query string, and body,
//!   checked in a configurable priority order
//! - 🧮 **Type coercion** – strings from the wire become ints, floats, and
//!   bools; objects pass through from the body
//! - 🧩 **Pluggable validation** – enum sets and custom predicates with
//!   literal or computed failure messages
//! - 🚦 **One failure mode** – any problem stops the chain with a 400 whose
//!   body is the failure message
//!
//! ## Quick Start
//!
//! ```rust
//! use reqmodel::prelude::*;
//!
//! let chain = MiddlewareChain::new().with(ModelMiddleware::new(
//!     Definition::new()
//!         .field("customer", FieldType::String)
//!         .field("points", FieldDef::new(FieldType::Int).default_value(10))
//!         .field(
//!             "food",
//!             FieldDef::new(FieldType::String).one_of(["pizza", "hamburger", "steak"]),
//!         ),
//! ));
//!
//! let request = http::Request::builder()
//!     .uri("/orders?customer=dan&food=pizza")
//!     .body(bytes::Bytes::new())
//!     .unwrap();
//!
//! let response = chain.handle(request, |req| {
//!     let model = req.model(DEFAULT_OUTPUT).unwrap();
//!     assert_eq!(model.str_of("customer"), Some("dan"));
//!     assert_eq!(model.int_of("points"), Some(10));
//!     http::Response::builder()
//!         .status(200)
//!         .body(bytes::Bytes::new())
//!         .unwrap()
//! });
//! assert_eq!(response.status(), 200);
//! ```
//!
//! ## Architecture
//!
//! The extraction pass is a single synchronous scan per declared field:
//!
//! ```text
//! Request → snapshot (params/query/body) → resolve → coerce → validate → Model
//!                                                                  ↓ (first failure)
//!                                                           400 + message
//! ```

#![doc(html_root_url = "https://docs.rs/reqmodel/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use reqmodel_core as core;

// Re-export the extraction engine
pub use reqmodel_extract as extract;

// Re-export middleware types
pub use reqmodel_middleware as middleware;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use reqmodel::prelude::*;
/// ```
pub mod prelude {
    pub use reqmodel_core::{
        DefaultValue, Definition, FieldDef, FieldType, Model, ModelError, ModelResult, Source,
        Validator,
    };

    // Re-export the engine
    pub use reqmodel_extract::{Extractor, RequestParts};

    // Re-export the middleware surface
    pub use reqmodel_middleware::{
        FnMiddleware, Middleware, MiddlewareChain, ModelMiddleware, ModelSet, Next, PathParams,
        Request, RequestModelExt, Response, ResponseExt, DEFAULT_OUTPUT,
    };
}
