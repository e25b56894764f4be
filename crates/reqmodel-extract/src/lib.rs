//! # Reqmodel Extract
//!
//! The extraction engine: resolves declared fields against a request's
//! sub-mappings, coerces them to their declared types, applies defaults,
//! and runs the required/enum/custom validation checks.
//!
//! The engine is synchronous, stateless, and single-pass. Each call takes
//! a [`RequestParts`] snapshot and returns either an immutable
//! [`Model`](reqmodel_core::Model) or the first failure as a
//! [`ModelError`](reqmodel_core::ModelError); nothing is retried and no
//! state is shared between calls, so one [`Extractor`] may serve any number
//! of concurrent requests.
//!
//! ## Example
//!
//! ```rust
//! use reqmodel_core::{Definition, FieldDef, FieldType};
//! use reqmodel_extract::{Extractor, RequestParts};
//! use serde_json::json;
//!
//! let extractor = Extractor::new(
//!     Definition::new()
//!         .field("customer", FieldType::String)
//!         .field("points", FieldDef::new(FieldType::Int).default_value(10)),
//! );
//!
//! let parts = RequestParts::builder()
//!     .query("customer", json!("dan"))
//!     .build();
//!
//! let model = extractor.extract(&parts).unwrap();
//! assert_eq!(model.str_of("customer"), Some("dan"));
//! assert_eq!(model.int_of("points"), Some(10));
//! ```

#![doc(html_root_url = "https://docs.rs/reqmodel-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coerce;
mod extract;
mod request;
mod resolve;

pub use extract::Extractor;
pub use request::{RequestParts, RequestPartsBuilder};

// Re-export the coercion entry point for callers that only need typing.
pub use coerce::coerce;
