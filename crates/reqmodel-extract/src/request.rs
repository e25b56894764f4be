//! Request snapshot.
//!
//! [`RequestParts`] is the request-like object the engine reads from: up to
//! three optional named sub-mappings, one per [`Source`].

use reqmodel_core::Source;
use serde_json::{Map, Value};

/// The extractable parts of one request: path params, query parameters,
/// and body fields.
///
/// A source *defines* a value for a lookup name when the key is present and
/// the value is neither `null` nor the empty string; anything else lets the
/// scan fall through to the next source.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::Source;
/// use reqmodel_extract::RequestParts;
/// use serde_json::json;
///
/// let parts = RequestParts::builder()
///     .param("id", json!("42"))
///     .query("limit", json!("10"))
///     .build();
///
/// assert_eq!(parts.lookup(Source::Params, "id"), Some(&json!("42")));
/// assert_eq!(parts.lookup(Source::Query, "limit"), Some(&json!("10")));
/// assert_eq!(parts.lookup(Source::Body, "id"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    params: Option<Map<String, Value>>,
    query: Option<Map<String, Value>>,
    body: Option<Map<String, Value>>,
}

impl RequestParts {
    /// Creates an empty snapshot (all three sources absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> RequestPartsBuilder {
        RequestPartsBuilder::default()
    }

    /// Returns the sub-mapping for a source, if the request carries one.
    #[must_use]
    pub fn source(&self, source: Source) -> Option<&Map<String, Value>> {
        match source {
            Source::Params => self.params.as_ref(),
            Source::Query => self.query.as_ref(),
            Source::Body => self.body.as_ref(),
        }
    }

    /// Looks up a defined value in one source.
    ///
    /// Returns `None` when the source is absent, the key is missing, or the
    /// value is `null` or the empty string.
    #[must_use]
    pub fn lookup(&self, source: Source, name: &str) -> Option<&Value> {
        self.source(source)
            .and_then(|map| map.get(name))
            .filter(|value| is_defined(value))
    }
}

/// A value counts as defined unless it is `null` or the empty string.
fn is_defined(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Builder for [`RequestParts`].
#[derive(Debug, Default)]
#[must_use]
pub struct RequestPartsBuilder {
    params: Option<Map<String, Value>>,
    query: Option<Map<String, Value>>,
    body: Option<Map<String, Value>>,
}

impl RequestPartsBuilder {
    /// Adds one path parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds one query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds one body field.
    pub fn body_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the whole body sub-mapping.
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Replaces the whole params sub-mapping.
    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// Replaces the whole query sub-mapping.
    pub fn query_map(mut self, query: Map<String, Value>) -> Self {
        self.query = Some(query);
        self
    }

    /// Builds the snapshot.
    pub fn build(self) -> RequestParts {
        RequestParts {
            params: self.params,
            query: self.query,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_defines_nothing() {
        let parts = RequestParts::new();
        assert_eq!(parts.lookup(Source::Params, "x"), None);
        assert_eq!(parts.lookup(Source::Query, "x"), None);
        assert_eq!(parts.lookup(Source::Body, "x"), None);
    }

    #[test]
    fn test_lookup_per_source() {
        let parts = RequestParts::builder()
            .param("x", json!("paramsX"))
            .query("x", json!("queryX"))
            .body_field("x", json!("bodyX"))
            .build();

        assert_eq!(parts.lookup(Source::Params, "x"), Some(&json!("paramsX")));
        assert_eq!(parts.lookup(Source::Query, "x"), Some(&json!("queryX")));
        assert_eq!(parts.lookup(Source::Body, "x"), Some(&json!("bodyX")));
    }

    #[test]
    fn test_null_and_empty_string_are_undefined() {
        let parts = RequestParts::builder()
            .query("a", Value::Null)
            .query("b", json!(""))
            .build();

        assert_eq!(parts.lookup(Source::Query, "a"), None);
        assert_eq!(parts.lookup(Source::Query, "b"), None);
    }

    #[test]
    fn test_zero_and_false_are_defined() {
        let parts = RequestParts::builder()
            .query("count", json!(0))
            .query("active", json!(false))
            .build();

        assert_eq!(parts.lookup(Source::Query, "count"), Some(&json!(0)));
        assert_eq!(parts.lookup(Source::Query, "active"), Some(&json!(false)));
    }

    #[test]
    fn test_whole_map_setters() {
        let mut body = Map::new();
        body.insert("food".to_string(), json!("pizza"));

        let parts = RequestParts::builder().body(body).build();
        assert_eq!(parts.lookup(Source::Body, "food"), Some(&json!("pizza")));
        assert!(parts.source(Source::Query).is_none());
    }
}
