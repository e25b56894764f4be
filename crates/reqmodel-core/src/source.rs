//! Lookup sources.
//!
//! A [`Source`] names one of the three request sub-mappings a field value
//! may be read from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a raw value is looked up on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Path parameters (e.g. `/users/{id}`).
    Params,
    /// Query string parameters.
    Query,
    /// Request body fields.
    Body,
}

impl Source {
    /// The default lookup order when a field declares no `sources`:
    /// path params first, then query, then body.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::Params, Self::Query, Self::Body];

    /// Resolves a source name from configuration data. Unknown names yield
    /// `None`; a lookup against a source the request does not have simply
    /// finds nothing, so misspelled names are not fatal.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "params" => Some(Self::Params),
            "query" => Some(Self::Query),
            "body" => Some(Self::Body),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params => write!(f, "params"),
            Self::Query => write!(f, "query"),
            Self::Body => write!(f, "body"),
        }
    }
}
