//! HTTP transport types shared by commands and request handlers.
//!
//! # Design
//! Requests and responses are described as plain data. Commands build
//! `HttpRequest` values and a `RequestHandler` executes them, so the network
//! sits behind a single seam and everything on this side stays deterministic
//! and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely across task boundaries.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by command descriptors. The request handler is responsible for
/// executing it against the network and producing a `RawResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Metadata of a completed HTTP exchange: the final resolved request URI
/// (after any redirects) and the response headers in arrival order.
///
/// Never mutated after construction. Response consumers use it for
/// pagination links and diagnostics.
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    response_uri: String,
    headers: Vec<(String, String)>,
}

impl ResponseInfo {
    pub fn new(response_uri: String, headers: Vec<(String, String)>) -> Self {
        Self {
            response_uri,
            headers,
        }
    }

    pub fn response_uri(&self) -> &str {
        &self.response_uri
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// A successful HTTP response described as plain data.
///
/// Produced by a `RequestHandler` for success statuses only; non-success
/// statuses surface as `HandlerError::Status` instead.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub info: ResponseInfo,
}
