//! Request and response types used by the middleware chain.
//!
//! Bodies are plain [`Bytes`]: the chain is synchronous and framework
//! agnostic, so no streaming body implementation is involved.

use bytes::Bytes;

/// The HTTP request type flowing through the chain.
pub type Request = http::Request<Bytes>;

/// The HTTP response type produced by the chain.
pub type Response = http::Response<Bytes>;

/// Extension trait for building error responses.
pub trait ResponseExt {
    /// Creates a 400 Bad Request response whose plain-text body is the
    /// failure message.
    fn bad_request(message: &str) -> Response;
}

impl ResponseExt for Response {
    fn bad_request(message: &str) -> Response {
        http::Response::builder()
            .status(http::StatusCode::BAD_REQUEST)
            .header(http::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Bytes::from(message.to_string()))
            .expect("failed to build error response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_bad_request_response() {
        let response = Response::bad_request("customer is a required parameter");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.body().as_ref(), b"customer is a required parameter");
    }
}
