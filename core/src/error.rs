//! Error types for the catalog API client.
//!
//! # Design
//! Credential and argument failures get dedicated variants because callers
//! handle them differently from server-side failures. A 404 from the country
//! endpoint is deliberately absent here: when it carries the catalog's
//! not-found body, the resolver maps it to `Ok(false)` rather than an error.

use std::fmt;

/// Errors returned by `CountryResolver`.
#[derive(Debug)]
pub enum ApiError {
    /// No client id was supplied at construction.
    CredentialsRequired,

    /// The country code argument was missing or empty.
    InvalidCountryCode,

    /// The server rejected the client id with 403.
    InvalidApiCredentials,

    /// The call failed for any other reason. `status` is `None` when the
    /// request never produced an HTTP response.
    CallFailed {
        status: Option<u16>,
        detail: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::CredentialsRequired => write!(f, "a client id is required"),
            ApiError::InvalidCountryCode => write!(f, "a country code is required"),
            ApiError::InvalidApiCredentials => {
                write!(f, "the API credentials were rejected by the server")
            }
            ApiError::CallFailed {
                status: Some(status),
                detail,
            } => write!(f, "API call failed with HTTP {status}: {detail}"),
            ApiError::CallFailed {
                status: None,
                detail,
            } => write!(f, "API call failed: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors surfaced by a `RequestHandler`.
///
/// Non-success HTTP statuses come back as `Status` with the raw body so the
/// command layer can interpret them; failures before a status line was read
/// come back as `Transport`.
#[derive(Debug, Clone)]
pub enum HandlerError {
    /// The server answered with a non-success status.
    Status { status: u16, body: String },

    /// The request failed before an HTTP response was received.
    Transport(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            HandlerError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for HandlerError {}
