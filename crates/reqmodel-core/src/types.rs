//! Field type tags.
//!
//! This module provides [`FieldType`], the closed set of coercion targets a
//! field definition may declare.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Tag table mapping declared type names to their coercion variant.
///
/// Several tags are aliases (`integer` for `int`, `decimal` for `float`,
/// `boolean` for `bool`).
const TAGS: &[(&str, FieldType)] = &[
    ("string", FieldType::String),
    ("int", FieldType::Int),
    ("integer", FieldType::Int),
    ("float", FieldType::Float),
    ("decimal", FieldType::Float),
    ("bool", FieldType::Bool),
    ("boolean", FieldType::Bool),
    ("object", FieldType::Object),
];

/// The type a resolved value is coerced to.
///
/// This is a closed set: any other declared tag is a definition error,
/// reported as [`ModelError::Definition`].
///
/// # Example
///
/// ```rust
/// use reqmodel_core::FieldType;
///
/// assert_eq!(FieldType::parse("integer").unwrap(), FieldType::Int);
/// assert_eq!(FieldType::parse("decimal").unwrap(), FieldType::Float);
///
/// let err = FieldType::parse("uuid").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid type in definition, uuid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Values pass through verbatim.
    String,
    /// Numeric values pass through; strings are parsed by their leading
    /// integer characters.
    Int,
    /// Numeric values pass through; strings are parsed by their leading
    /// decimal characters.
    Float,
    /// True only for `true`, `"true"`, `1`, or `"1"`; everything else is
    /// false.
    Bool,
    /// Values pass through untouched and are only ever read from the body.
    Object,
}

impl FieldType {
    /// Resolves a declared type tag via the tag table.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Definition`] for an unrecognized tag.
    pub fn parse(tag: &str) -> Result<Self, ModelError> {
        TAGS.iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, ty)| *ty)
            .ok_or_else(|| ModelError::definition(tag))
    }

    /// Returns the canonical tag for this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}
