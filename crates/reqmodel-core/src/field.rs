//! Field definitions.

use crate::default::DefaultValue;
use crate::error::ModelError;
use crate::source::Source;
use crate::types::FieldType;
use crate::validate::Validator;
use serde::Deserialize;
use serde_json::Value;

/// Declarative description of one expected request parameter.
///
/// A definition names the coercion target and, optionally, an alternate
/// lookup name, a default, an explicit requiredness, an allowed-value set,
/// a lookup-source order, and a custom validator.
///
/// A field is required when `required` is set explicitly, otherwise exactly
/// when it has no default.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::{FieldDef, FieldType, Source, Validator};
///
/// let field = FieldDef::new(FieldType::Int)
///     .name("point_total")
///     .default_value(10)
///     .sources([Source::Query, Source::Body])
///     .validate(Validator::new(|v| v.as_i64().is_some_and(|n| n >= 0)));
///
/// assert!(!field.is_required());
/// assert_eq!(field.lookup_name("points"), "point_total");
/// ```
#[derive(Debug, Clone)]
pub struct FieldDef {
    ty: FieldType,
    name: Option<String>,
    default: Option<DefaultValue>,
    required: Option<bool>,
    one_of: Option<Vec<Value>>,
    sources: Option<Vec<Source>>,
    validator: Option<Validator>,
}

impl FieldDef {
    /// Creates a definition for the given coercion target with no alternate
    /// name, no default, and implicit requiredness.
    #[must_use]
    pub fn new(ty: FieldType) -> Self {
        Self {
            ty,
            name: None,
            default: None,
            required: None,
            one_of: None,
            sources: None,
            validator: None,
        }
    }

    /// Sets an alternate lookup name.
    ///
    /// The output model is still keyed by the definition key; only the
    /// source lookup (and error messages) use this name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a static default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Static(value.into()));
        self
    }

    /// Sets a default produced by a zero-argument closure, invoked once per
    /// missing resolution.
    #[must_use]
    pub fn default_with(mut self, producer: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default = Some(DefaultValue::produced(producer));
        self
    }

    /// Sets requiredness explicitly, overriding the implicit rule.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Restricts the field to a set of allowed values, checked after
    /// coercion. Order is preserved for error messages.
    #[must_use]
    pub fn one_of<V: Into<Value>>(mut self, allowed: impl IntoIterator<Item = V>) -> Self {
        self.one_of = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the lookup-source order for this field.
    #[must_use]
    pub fn sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources = Some(sources.into_iter().collect());
        self
    }

    /// Attaches a custom validator.
    #[must_use]
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The declared coercion target.
    #[must_use]
    pub fn ty(&self) -> FieldType {
        self.ty
    }

    /// The name used for source lookups and error messages: the alternate
    /// name when one is declared, otherwise the definition key.
    #[must_use]
    pub fn lookup_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }

    /// Whether an absent resolution fails the extraction.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or_else(|| self.default.is_none())
    }

    /// The configured default, if any.
    #[must_use]
    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// The allowed-value set, if declared.
    #[must_use]
    pub fn allowed(&self) -> Option<&[Value]> {
        self.one_of.as_deref()
    }

    /// The lookup-source order: the declared one, or
    /// [`Source::DEFAULT_ORDER`].
    #[must_use]
    pub fn source_order(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or(&Source::DEFAULT_ORDER)
    }

    /// The custom validator, if attached.
    #[must_use]
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }
}

impl From<FieldType> for FieldDef {
    /// A bare type is shorthand for a required field with no default.
    fn from(ty: FieldType) -> Self {
        Self::new(ty)
    }
}

impl FieldDef {
    /// Reads a definition from configuration data: either a bare type tag
    /// (`"int"`) or a record (`{"type": "int", "default": 10, ...}`).
    ///
    /// Producers and validators cannot come from configuration data; they
    /// attach through the builder API only. Unknown record keys and unknown
    /// source names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Definition`] when the declared type is outside
    /// the closed tag set, or when the value is neither a tag nor a record.
    pub fn from_config(config: &Value) -> Result<Self, ModelError> {
        match config {
            Value::String(tag) => Ok(Self::new(FieldType::parse(tag)?)),
            Value::Object(record) => {
                let ty = match record.get("type") {
                    // A record without a type reads as a string field.
                    None | Some(Value::Null) => FieldType::String,
                    Some(Value::String(tag)) => FieldType::parse(tag)?,
                    Some(other) => return Err(ModelError::definition(other.to_string())),
                };
                let sources = record.get("sources").and_then(Value::as_array).map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .filter_map(Source::from_tag)
                        .collect()
                });
                Ok(Self {
                    ty,
                    name: record
                        .get("name")
                        .and_then(Value::as_str)
                        .map(String::from),
                    default: record
                        .get("default")
                        .filter(|v| !v.is_null())
                        .cloned()
                        .map(DefaultValue::Static),
                    required: record.get("required").and_then(Value::as_bool),
                    one_of: record.get("enum").and_then(Value::as_array).cloned(),
                    sources,
                    validator: None,
                })
            }
            other => Err(ModelError::definition(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for FieldDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let config = Value::deserialize(deserializer)?;
        Self::from_config(&config).map_err(serde::de::Error::custom)
    }
}
