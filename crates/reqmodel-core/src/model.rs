//! The resolved output model.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// The resolved, coerced, validated output of one extraction.
///
/// A model is created fresh per extraction and never mutated afterward;
/// only read accessors are exposed. Keys follow the definition's
/// declaration order. Fields that resolved to absent (not required, no
/// default) are omitted.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::Model;
/// use serde_json::json;
///
/// let model: Model = [
///     ("customer".to_string(), json!("dan")),
///     ("points".to_string(), json!(20)),
///     ("subscriber".to_string(), json!(true)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(model.str_of("customer"), Some("dan"));
/// assert_eq!(model.int_of("points"), Some(20));
/// assert_eq!(model.bool_of("subscriber"), Some(true));
/// assert_eq!(model.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Model {
    values: IndexMap<String, Value>,
}

impl Model {
    /// Looks up a resolved value by definition key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns true if the field resolved to a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// A string field's value.
    #[must_use]
    pub fn str_of(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// An int field's value.
    #[must_use]
    pub fn int_of(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// A float field's value. Integer-shaped numbers convert.
    #[must_use]
    pub fn float_of(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// A bool field's value.
    #[must_use]
    pub fn bool_of(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// An object field's value.
    #[must_use]
    pub fn object_of(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Number of resolved fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no field resolved to a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates resolved fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the model and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.values
    }
}

impl From<IndexMap<String, Value>> for Model {
    fn from(values: IndexMap<String, Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, Value)> for Model {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
