//! Test response wrapper.

use http::StatusCode;
use reqmodel_middleware::Response;

/// A response with helper methods for assertions.
#[derive(Debug)]
pub struct TestResponse {
    inner: Response,
}

impl TestResponse {
    /// The status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// The status code as a u16.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// The body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.inner.body()).into_owned()
    }

    /// Asserts the status code equals the expected value.
    ///
    /// # Panics
    ///
    /// Panics when the status code doesn't match.
    pub fn assert_status_code(&self, expected: u16) -> &Self {
        assert_eq!(
            self.status_code(),
            expected,
            "Expected status {expected}, got {}",
            self.status_code()
        );
        self
    }

    /// Asserts the body equals the expected text.
    ///
    /// # Panics
    ///
    /// Panics when the body doesn't match.
    pub fn assert_body_eq(&self, expected: impl AsRef<str>) -> &Self {
        assert_eq!(self.text(), expected.as_ref(), "Body mismatch");
        self
    }

    /// Asserts the body contains the expected substring.
    ///
    /// # Panics
    ///
    /// Panics when the body doesn't contain the substring.
    pub fn assert_body_contains(&self, expected: impl AsRef<str>) -> &Self {
        let expected = expected.as_ref();
        let body = self.text();
        assert!(
            body.contains(expected),
            "Body should contain '{expected}', got: {body}"
        );
        self
    }
}

impl From<Response> for TestResponse {
    fn from(inner: Response) -> Self {
        Self { inner }
    }
}
