//! The extraction engine.

use crate::coerce::coerce;
use crate::request::RequestParts;
use crate::resolve::resolve;
use indexmap::IndexMap;
use reqmodel_core::{Definition, Model, ModelError};
use std::sync::Arc;
use tracing::{debug, trace};

/// Evaluates a [`Definition`] against request snapshots.
///
/// An extractor is stateless: each [`extract`](Self::extract) call is an
/// independent, synchronous, single-pass evaluation, so one extractor can
/// be shared across threads and requests without coordination.
///
/// Fields are processed in declaration order; the first failing field
/// aborts the whole extraction and later fields are never evaluated.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::{Definition, FieldDef, FieldType};
/// use reqmodel_extract::{Extractor, RequestParts};
/// use serde_json::json;
///
/// let extractor = Extractor::new(
///     Definition::new()
///         .field("food", FieldDef::new(FieldType::String).one_of(["pizza", "steak"])),
/// );
///
/// let parts = RequestParts::builder().body_field("food", json!("eggs")).build();
/// let err = extractor.extract(&parts).unwrap_err();
/// assert_eq!(err.to_string(), "food was eggs. Must be one of: pizza, steak");
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    definition: Arc<Definition>,
}

impl Extractor {
    /// Creates an extractor over a definition.
    #[must_use]
    pub fn new(definition: impl Into<Arc<Definition>>) -> Self {
        Self {
            definition: definition.into(),
        }
    }

    /// The definition this extractor evaluates.
    #[must_use]
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Runs the extraction: resolve, coerce, then check required, enum, and
    /// custom validation per field, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first failure; see
    /// [`ModelError`] for the failure modes. The returned model is built
    /// fresh and never shares state with the snapshot.
    pub fn extract(&self, parts: &RequestParts) -> Result<Model, ModelError> {
        let mut values = IndexMap::with_capacity(self.definition.len());

        for (key, def) in self.definition.iter() {
            let name = def.lookup_name(key);

            let value = match resolve(parts, key, def) {
                Some(raw) => Some(coerce(name, raw, def.ty()).map_err(|err| {
                    debug!(field = key, error = %err, "coercion failed");
                    err
                })?),
                None => None,
            };

            let Some(value) = value else {
                if def.is_required() {
                    debug!(field = key, "missing required parameter");
                    return Err(ModelError::required(name));
                }
                continue;
            };

            if let Some(allowed) = def.allowed() {
                if !allowed.contains(&value) {
                    debug!(field = key, "value outside allowed set");
                    return Err(ModelError::enumeration(name, value, allowed.to_vec()));
                }
            }

            if let Some(validator) = def.validator() {
                validator.run(name, &value).map_err(|err| {
                    debug!(field = key, error = %err, "validation failed");
                    err
                })?;
            }

            trace!(field = key, "resolved");
            values.insert(key.to_string(), value);
        }

        Ok(Model::from(values))
    }
}

impl From<Definition> for Extractor {
    fn from(definition: Definition) -> Self {
        Self::new(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqmodel_core::{FieldDef, FieldType, Source, Validator};
    use serde_json::json;

    #[test]
    fn test_parses_parameters_across_types() {
        let extractor = Extractor::new(
            Definition::new()
                .field("customer", FieldType::String)
                .field("points", FieldDef::new(FieldType::Int).default_value(10))
                .field("subscriber", FieldType::Bool)
                .field("percentage", FieldType::Float),
        );

        let parts = RequestParts::builder()
            .query("customer", json!("dan"))
            .query("subscriber", json!("true"))
            .query("points", json!(20))
            .query("percentage", json!(99.3))
            .build();

        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.str_of("customer"), Some("dan"));
        assert_eq!(model.bool_of("subscriber"), Some(true));
        assert_eq!(model.int_of("points"), Some(20));
        assert_eq!(model.float_of("percentage"), Some(99.3));
    }

    #[test]
    fn test_missing_required_parameter() {
        let extractor = Extractor::new(Definition::new().field("required", FieldType::String));
        let parts = RequestParts::builder().query("x", json!(1)).build();

        let err = extractor.extract(&parts).unwrap_err();
        assert_eq!(err.to_string(), "required is a required parameter");
    }

    #[test]
    fn test_required_error_uses_lookup_name() {
        let extractor = Extractor::new(
            Definition::new().field("food", FieldDef::new(FieldType::String).name("food_choice")),
        );

        let err = extractor.extract(&RequestParts::new()).unwrap_err();
        assert_eq!(err.to_string(), "food_choice is a required parameter");
    }

    #[test]
    fn test_uses_defaults_on_empty_request() {
        let extractor = Extractor::new(
            Definition::new().field("x", FieldDef::new(FieldType::Int).default_value(10)),
        );

        let model = extractor.extract(&RequestParts::new()).unwrap();
        assert_eq!(model.int_of("x"), Some(10));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_produced_default_used_verbatim() {
        let extractor = Extractor::new(
            Definition::new()
                .field("stamp", FieldDef::new(FieldType::Int).default_with(|| json!(1_700_000_000))),
        );

        let model = extractor.extract(&RequestParts::new()).unwrap();
        assert_eq!(model.int_of("stamp"), Some(1_700_000_000));
    }

    #[test]
    fn test_reads_in_priority_order() {
        let extractor = Extractor::new(
            Definition::new()
                .field("x", FieldType::String)
                .field("y", FieldType::String)
                .field("z", FieldType::String),
        );

        let parts = RequestParts::builder()
            .param("x", json!("paramsX"))
            .query("x", json!("queryX"))
            .query("y", json!("queryY"))
            .body_field("x", json!("bodyX"))
            .body_field("y", json!("bodyY"))
            .body_field("z", json!("bodyZ"))
            .build();

        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.str_of("x"), Some("paramsX"));
        assert_eq!(model.str_of("y"), Some("queryY"));
        assert_eq!(model.str_of("z"), Some("bodyZ"));
    }

    #[test]
    fn test_reads_from_configured_sources() {
        let extractor = Extractor::new(
            Definition::new()
                .field("x", FieldDef::new(FieldType::String).sources([Source::Body]))
                .field("y", FieldType::String)
                .field("z", FieldType::String),
        );

        let parts = RequestParts::builder()
            .param("x", json!("paramsX"))
            .query("x", json!("queryX"))
            .query("y", json!("queryY"))
            .body_field("x", json!("bodyX"))
            .body_field("y", json!("bodyY"))
            .body_field("z", json!("bodyZ"))
            .build();

        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.str_of("x"), Some("bodyX"));
        assert_eq!(model.str_of("y"), Some("queryY"));
        assert_eq!(model.str_of("z"), Some("bodyZ"));
    }

    #[test]
    fn test_reads_objects_from_body_only() {
        let extractor = Extractor::new(Definition::new().field("x", FieldType::Object));

        let parts = RequestParts::builder()
            .body_field("x", json!({"a": 1, "b": 2, "c": 3}))
            .build();

        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.get("x"), Some(&json!({"a": 1, "b": 2, "c": 3})));
    }

    #[test]
    fn test_allows_valid_enum_values() {
        let extractor = Extractor::new(Definition::new().field(
            "food",
            FieldDef::new(FieldType::String).one_of(["pizza", "hamburger", "steak"]),
        ));

        let parts = RequestParts::builder().body_field("food", json!("pizza")).build();
        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.str_of("food"), Some("pizza"));
    }

    #[test]
    fn test_rejects_invalid_enum_values() {
        let extractor = Extractor::new(Definition::new().field(
            "food",
            FieldDef::new(FieldType::String).one_of(["pizza", "hamburger", "steak"]),
        ));

        let parts = RequestParts::builder().body_field("food", json!("eggs")).build();
        let err = extractor.extract(&parts).unwrap_err();
        assert_eq!(
            err.to_string(),
            "food was eggs. Must be one of: pizza, hamburger, steak"
        );
    }

    #[test]
    fn test_converts_names() {
        let extractor = Extractor::new(
            Definition::new().field("food", FieldDef::new(FieldType::String).name("food_choice")),
        );

        let parts = RequestParts::builder()
            .body_field("food_choice", json!("pizza"))
            .build();

        let model = extractor.extract(&parts).unwrap();
        assert_eq!(model.str_of("food"), Some("pizza"));
    }

    #[test]
    fn test_custom_validation_with_fallback_message() {
        let extractor = Extractor::new(Definition::new().field(
            "age",
            FieldDef::new(FieldType::Int).validate(Validator::new(|v| {
                v.as_i64().is_some_and(|n| n >= 18)
            })),
        ));

        let parts = RequestParts::builder().query("age", json!(12)).build();
        let err = extractor.extract(&parts).unwrap_err();
        assert_eq!(err.to_string(), "age failed validation");
    }

    #[test]
    fn test_custom_validation_with_computed_message() {
        let extractor = Extractor::new(Definition::new().field(
            "age",
            FieldDef::new(FieldType::Int).validate(
                Validator::new(|v| v.as_i64().is_some_and(|n| n >= 18))
                    .message_with(|v| format!("{v} is under 18")),
            ),
        ));

        let parts = RequestParts::builder().query("age", json!(12)).build();
        let err = extractor.extract(&parts).unwrap_err();
        assert_eq!(err.to_string(), "12 is under 18");
    }

    #[test]
    fn test_first_failure_aborts_later_fields() {
        let extractor = Extractor::new(
            Definition::new()
                .field("first", FieldType::String)
                .field(
                    "second",
                    FieldDef::new(FieldType::Int).validate(Validator::new(|_| {
                        panic!("second field must not be evaluated")
                    })),
                ),
        );

        let parts = RequestParts::builder().query("second", json!(1)).build();
        let err = extractor.extract(&parts).unwrap_err();
        assert_eq!(err.to_string(), "first is a required parameter");
    }

    #[test]
    fn test_optional_absent_field_is_omitted() {
        let extractor = Extractor::new(
            Definition::new()
                .field("x", FieldDef::new(FieldType::String).required(false)),
        );

        let model = extractor.extract(&RequestParts::new()).unwrap();
        assert!(model.is_empty());
        assert!(!model.contains("x"));
    }

    #[test]
    fn test_merged_definitions_behave_like_single() {
        let identity = Definition::new().field("customer", FieldType::String);
        let paging = Definition::new()
            .field("limit", FieldDef::new(FieldType::Int).default_value(20));

        let merged = Extractor::new(identity.merge(paging));
        let single = Extractor::new(
            Definition::new()
                .field("customer", FieldType::String)
                .field("limit", FieldDef::new(FieldType::Int).default_value(20)),
        );

        let parts = RequestParts::builder().query("customer", json!("dan")).build();
        assert_eq!(merged.extract(&parts).unwrap(), single.extract(&parts).unwrap());

        // Required checks apply per field regardless of which definition
        // declared it.
        let err = merged.extract(&RequestParts::new()).unwrap_err();
        assert_eq!(err.to_string(), "customer is a required parameter");
    }

    #[test]
    fn test_defaulted_false_string_coerces_to_false() {
        let extractor = Extractor::new(Definition::new().field(
            "enabled",
            FieldDef::new(FieldType::Bool).default_value("false"),
        ));

        let model = extractor.extract(&RequestParts::new()).unwrap();
        assert_eq!(model.bool_of("enabled"), Some(false));
    }
}
