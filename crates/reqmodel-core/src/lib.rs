//! # Reqmodel Core
//!
//! Field definitions, output model, and error types for the reqmodel
//! request-parameter extraction library.
//!
//! A [`Definition`] declares the parameters an endpoint expects: their
//! [`FieldType`], lookup [`Source`]s, defaults, allowed values, and custom
//! [`Validator`]s. The extraction engine (in `reqmodel-extract`) evaluates a
//! definition against a request and produces a [`Model`] or a [`ModelError`].
//!
//! ## Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FieldType`] | Closed set of coercion targets (string, int, float, bool, object) |
//! | [`Source`] | Where a value may be read from (path params, query, body) |
//! | [`FieldDef`] | Declarative description of one expected parameter |
//! | [`Definition`] | Ordered map of output keys to field definitions |
//! | [`DefaultValue`] | Static fallback value or zero-argument producer |
//! | [`Validator`] | Predicate with an optional failure message |
//! | [`Model`] | Immutable resolved output, one entry per declared field |
//! | [`ModelError`] | Why an extraction failed; always maps to HTTP 400 |
//!
//! ## Example
//!
//! ```rust
//! use reqmodel_core::{Definition, FieldDef, FieldType};
//!
//! let definition = Definition::new()
//!     .field("customer", FieldType::String)
//!     .field("points", FieldDef::new(FieldType::Int).default_value(10))
//!     .field(
//!         "food",
//!         FieldDef::new(FieldType::String).one_of(["pizza", "hamburger", "steak"]),
//!     );
//!
//! assert_eq!(definition.len(), 3);
//! assert!(definition.get("customer").is_some());
//! ```
//!
//! Definitions can also be loaded from configuration data. Each field is
//! either a bare type tag or a record; producers and validators attach only
//! through the builder API:
//!
//! ```rust
//! use reqmodel_core::Definition;
//!
//! let definition: Definition = serde_json::from_value(serde_json::json!({
//!     "customer": "string",
//!     "points": { "type": "int", "default": 10 },
//! }))
//! .unwrap();
//!
//! assert!(!definition.get("points").unwrap().is_required());
//! ```

#![doc(html_root_url = "https://docs.rs/reqmodel-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod default;
mod definition;
mod error;
mod field;
mod model;
mod source;
mod types;
mod validate;

pub use default::DefaultValue;
pub use definition::Definition;
pub use error::{ModelError, ModelResult};
pub use field::FieldDef;
pub use model::Model;
pub use source::Source;
pub use types::FieldType;
pub use validate::Validator;
