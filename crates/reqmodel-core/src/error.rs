//! Extraction error types.
//!
//! All failures collapse to the same externally observable behavior: an
//! HTTP 400 response whose body is the error's message text. The variants
//! exist so callers replacing that behavior can still tell the failure
//! modes apart.

use crate::types::FieldType;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Result type alias using [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Why an extraction failed.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::ModelError;
/// use http::StatusCode;
///
/// let err = ModelError::required("customer");
/// assert_eq!(err.to_string(), "customer is a required parameter");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The definition declared a type tag outside the closed set.
    ///
    /// This is a caller configuration bug, but it is still reported at
    /// request time like every other failure.
    #[error("Invalid type in definition, {tag}")]
    Definition {
        /// The unrecognized type tag.
        tag: String,
    },

    /// A required field resolved to no value.
    #[error("{name} is a required parameter")]
    Required {
        /// The field's lookup name.
        name: String,
    },

    /// The resolved value is not a member of the declared enum set.
    #[error("{name} was {}. Must be one of: {}", fmt_value(.value), fmt_values(.allowed))]
    Enum {
        /// The field's lookup name.
        name: String,
        /// The offending resolved value.
        value: Value,
        /// The allowed values, in declared order.
        allowed: Vec<Value>,
    },

    /// A custom validation predicate rejected the resolved value.
    #[error("{message}")]
    Validation {
        /// The declared or computed failure message.
        message: String,
    },

    /// A value could not be coerced to the field's declared type.
    #[error("{name} was {}. Must be a valid {ty}", fmt_value(.value))]
    Coercion {
        /// The field's lookup name.
        name: String,
        /// The raw value that failed to coerce.
        value: Value,
        /// The declared target type.
        ty: FieldType,
    },
}

impl ModelError {
    /// Creates a definition error for an unrecognized type tag.
    #[must_use]
    pub fn definition(tag: impl Into<String>) -> Self {
        Self::Definition { tag: tag.into() }
    }

    /// Creates a missing-required-field error.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self::Required { name: name.into() }
    }

    /// Creates an enum-violation error.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, value: Value, allowed: Vec<Value>) -> Self {
        Self::Enum {
            name: name.into(),
            value,
            allowed,
        }
    }

    /// Creates a custom-validation error carrying the failure message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a coercion error.
    #[must_use]
    pub fn coercion(name: impl Into<String>, value: Value, ty: FieldType) -> Self {
        Self::Coercion {
            name: name.into(),
            value,
            ty,
        }
    }

    /// The HTTP status code for this error.
    ///
    /// Every failure mode is reported as 400 Bad Request; there is no
    /// structured error code and no partial success.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Renders a value for an error message: strings appear bare, without the
/// JSON quotes; everything else uses its JSON rendering.
fn fmt_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders the allowed values joined by a comma, in declared order.
fn fmt_values(values: &[Value]) -> String {
    values
        .iter()
        .map(fmt_value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_message() {
        let err = ModelError::definition("badType");
        assert_eq!(err.to_string(), "Invalid type in definition, badType");
    }

    #[test]
    fn test_required_message() {
        let err = ModelError::required("customer");
        assert_eq!(err.to_string(), "customer is a required parameter");
    }

    #[test]
    fn test_enum_message_lists_allowed_in_declared_order() {
        let err = ModelError::enumeration(
            "food",
            json!("eggs"),
            vec![json!("pizza"), json!("hamburger"), json!("steak")],
        );
        assert_eq!(
            err.to_string(),
            "food was eggs. Must be one of: pizza, hamburger, steak"
        );
    }

    #[test]
    fn test_enum_message_with_numbers() {
        let err = ModelError::enumeration("level", json!(7), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(err.to_string(), "level was 7. Must be one of: 1, 2, 3");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ModelError::validation("age must be positive");
        assert_eq!(err.to_string(), "age must be positive");
    }

    #[test]
    fn test_coercion_message() {
        let err = ModelError::coercion("points", json!("abc"), FieldType::Int);
        assert_eq!(err.to_string(), "points was abc. Must be a valid int");
    }

    #[test]
    fn test_all_variants_map_to_400() {
        let errors = [
            ModelError::definition("x"),
            ModelError::required("x"),
            ModelError::enumeration("x", json!(1), vec![json!(2)]),
            ModelError::validation("x"),
            ModelError::coercion("x", json!("y"), FieldType::Float),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }
}
