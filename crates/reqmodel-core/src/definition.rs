//! Definition maps.

use crate::error::ModelError;
use crate::field::FieldDef;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// An ordered map from output keys to field definitions.
///
/// Declaration order is semantic: fields are processed in order and the
/// first failing field aborts the whole extraction, so later fields are
/// never evaluated once one fails.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::{Definition, FieldDef, FieldType};
///
/// let paging = Definition::new()
///     .field("limit", FieldDef::new(FieldType::Int).default_value(20))
///     .field("offset", FieldDef::new(FieldType::Int).default_value(0));
///
/// let listing = Definition::new()
///     .field("customer", FieldType::String)
///     .merge(paging);
///
/// assert_eq!(
///     listing.keys().collect::<Vec<_>>(),
///     ["customer", "limit", "offset"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definition {
    fields: IndexMap<String, FieldDef>,
}

impl Definition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. A bare [`FieldType`](crate::FieldType) is
    /// shorthand for a required field with no default.
    ///
    /// Redeclaring a key replaces the earlier definition but keeps its
    /// position.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, def: impl Into<FieldDef>) -> Self {
        self.fields.insert(key.into(), def.into());
        self
    }

    /// Composes two definitions. Fields of `other` are appended; on key
    /// collision the later declaration wins. The result behaves identically
    /// to a single definition declaring the union.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (key, def) in other.fields {
            self.fields.insert(key, def);
        }
        self
    }

    /// Reads a whole definition from configuration data: a mapping from
    /// field keys to tag-or-record entries (see
    /// [`FieldDef::from_config`]).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Definition`] when any field declares an
    /// unrecognized type, or when the value is not a mapping.
    pub fn from_config(config: &Value) -> Result<Self, ModelError> {
        let Value::Object(map) = config else {
            return Err(ModelError::definition(config.to_string()));
        };

        let mut fields = IndexMap::with_capacity(map.len());
        for (key, entry) in map {
            fields.insert(key.clone(), FieldDef::from_config(entry)?);
        }
        Ok(Self { fields })
    }

    /// Looks up a field definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDef> {
        self.fields.get(key)
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates field keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, FieldDef)> for Definition {
    fn from_iter<I: IntoIterator<Item = (String, FieldDef)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Definition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialized through IndexMap so declaration order survives even
        // without serde_json's preserve_order feature.
        let entries = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut fields = IndexMap::with_capacity(entries.len());
        for (key, entry) in entries {
            fields.insert(
                key,
                FieldDef::from_config(&entry).map_err(serde::de::Error::custom)?,
            );
        }
        Ok(Self { fields })
    }
}
