//! HTTP request adaptation.
//!
//! Builds the engine's [`RequestParts`] snapshot from an
//! [`http::Request`]: path params from the [`PathParams`] extension, query
//! parameters from the URI, body fields from a JSON object payload.

use crate::path::PathParams;
use crate::types::Request;
use reqmodel_extract::RequestParts;
use serde_json::Value;
use tracing::trace;

/// Snapshots the extractable parts of a request.
///
/// Query values arrive as strings; type coercion in the engine handles the
/// typing. A payload that is not a JSON object leaves the body source
/// empty, so fields depending on it fall back to defaults or fail the
/// required check.
#[must_use]
pub fn request_parts(request: &Request) -> RequestParts {
    let mut builder = RequestParts::builder();

    if let Some(params) = request.extensions().get::<PathParams>() {
        for (name, value) in params.iter() {
            builder = builder.param(name, Value::from(value));
        }
    }

    if let Some(query) = request.uri().query() {
        match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => {
                for (name, value) in pairs {
                    builder = builder.query(name, Value::from(value));
                }
            }
            Err(err) => trace!(error = %err, "unparseable query string"),
        }
    }

    if !request.body().is_empty() {
        match serde_json::from_slice::<Value>(request.body()) {
            Ok(Value::Object(map)) => builder = builder.body(map),
            Ok(_) => trace!("request body is not a JSON object"),
            Err(err) => trace!(error = %err, "request body is not valid JSON"),
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqmodel_core::Source;
    use serde_json::json;

    fn make_request(uri: &str, body: &str) -> Request {
        http::Request::builder()
            .uri(uri)
            .body(Bytes::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_query_parameters_arrive_as_strings() {
        let request = make_request("/users?limit=10&name=alice", "");
        let parts = request_parts(&request);

        assert_eq!(parts.lookup(Source::Query, "limit"), Some(&json!("10")));
        assert_eq!(parts.lookup(Source::Query, "name"), Some(&json!("alice")));
    }

    #[test]
    fn test_url_decoding() {
        let request = make_request("/search?q=rust%2Blang&msg=Hello%20World", "");
        let parts = request_parts(&request);

        assert_eq!(parts.lookup(Source::Query, "q"), Some(&json!("rust+lang")));
        assert_eq!(
            parts.lookup(Source::Query, "msg"),
            Some(&json!("Hello World"))
        );
    }

    #[test]
    fn test_path_params_from_extension() {
        let mut request = make_request("/users/42", "");
        let mut params = PathParams::new();
        params.push("id", "42");
        request.extensions_mut().insert(params);

        let parts = request_parts(&request);
        assert_eq!(parts.lookup(Source::Params, "id"), Some(&json!("42")));
    }

    #[test]
    fn test_json_object_body() {
        let request = make_request("/orders", r#"{"food": "pizza", "count": 2}"#);
        let parts = request_parts(&request);

        assert_eq!(parts.lookup(Source::Body, "food"), Some(&json!("pizza")));
        assert_eq!(parts.lookup(Source::Body, "count"), Some(&json!(2)));
    }

    #[test]
    fn test_non_object_body_is_ignored() {
        let request = make_request("/orders", r#"["not", "an", "object"]"#);
        let parts = request_parts(&request);
        assert!(parts.source(Source::Body).is_none());
    }

    #[test]
    fn test_invalid_json_body_is_ignored() {
        let request = make_request("/orders", "{ not json }");
        let parts = request_parts(&request);
        assert!(parts.source(Source::Body).is_none());
    }

    #[test]
    fn test_empty_request() {
        let request = make_request("/", "");
        let parts = request_parts(&request);
        assert!(parts.source(Source::Params).is_none());
        assert!(parts.source(Source::Query).is_none());
        assert!(parts.source(Source::Body).is_none());
    }
}
