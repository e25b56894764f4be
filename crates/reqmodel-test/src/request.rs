//! Test request building.

use bytes::Bytes;
use http::Method;
use reqmodel_middleware::{PathParams, Request};
use serde::Serialize;

/// Entry points for building in-memory test requests.
///
/// # Example
///
/// ```rust
/// use reqmodel_test::TestRequest;
/// use serde_json::json;
///
/// let request = TestRequest::post("/orders")
///     .path_param("storeId", "7")
///     .query("limit", "10")
///     .json(&json!({"food": "pizza"}))
///     .build();
///
/// assert_eq!(request.uri().path(), "/orders");
/// assert_eq!(request.uri().query(), Some("limit=10"));
/// ```
pub struct TestRequest;

impl TestRequest {
    /// Starts a GET request.
    pub fn get(path: impl AsRef<str>) -> TestRequestBuilder {
        TestRequestBuilder::new(Method::GET, path)
    }

    /// Starts a POST request.
    pub fn post(path: impl AsRef<str>) -> TestRequestBuilder {
        TestRequestBuilder::new(Method::POST, path)
    }

    /// Starts a PUT request.
    pub fn put(path: impl AsRef<str>) -> TestRequestBuilder {
        TestRequestBuilder::new(Method::PUT, path)
    }

    /// Starts a DELETE request.
    pub fn delete(path: impl AsRef<str>) -> TestRequestBuilder {
        TestRequestBuilder::new(Method::DELETE, path)
    }
}

/// Builder for test requests.
#[must_use]
pub struct TestRequestBuilder {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    path_params: PathParams,
    body: Option<Bytes>,
}

impl TestRequestBuilder {
    /// Creates a builder for the given method and path.
    pub fn new(method: Method, path: impl AsRef<str>) -> Self {
        Self {
            method,
            path: path.as_ref().to_string(),
            query: Vec::new(),
            path_params: PathParams::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Attaches a path parameter, as a router would after matching the
    /// route template.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push(name, value);
        self
    }

    /// Sets the body to the JSON encoding of `value`.
    pub fn json<T: Serialize>(mut self, value: &T) -> Self {
        let bytes = serde_json::to_vec(value).expect("JSON serialization should succeed");
        self.body = Some(Bytes::from(bytes));
        self
    }

    /// Sets a raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the request.
    ///
    /// # Panics
    ///
    /// Panics when the path and query do not form a valid URI.
    pub fn build(self) -> Request {
        let uri = if self.query.is_empty() {
            self.path
        } else {
            let query =
                serde_urlencoded::to_string(&self.query).expect("query encoding should succeed");
            format!("{}?{}", self.path, query)
        };

        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body.unwrap_or_default())
            .expect("valid request");

        if !self.path_params.is_empty() {
            request.extensions_mut().insert(self.path_params);
        }
        request
    }
}
