//! Command descriptors for catalog API operations.
//!
//! # Design
//! A command is a stateless value describing one operation. Its HTTP method
//! and content type are constants of the operation, not derived from caller
//! input, and `build_request` turns the command into a plain-data
//! `HttpRequest`. Commands are created per call and never reused.

use crate::http::{HttpMethod, HttpRequest};

/// Root of the catalog web API.
pub const DEFAULT_BASE_URI: &str = "https://api.mixrad.io/1.x";

/// Per-client settings passed to the request handler on every call.
///
/// `country_code` and `country_code_from_locale` stay `None`/`false` for
/// availability checks: the country under test is always explicit, never
/// inferred from the system locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub client_id: String,
    pub country_code: Option<String>,
    pub country_code_from_locale: bool,
}

/// Describes one lookup of a country code against the catalog.
#[derive(Debug, Clone)]
pub struct CountryResolverCommand {
    country_code: String,
}

impl CountryResolverCommand {
    pub fn new(country_code: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
        }
    }

    /// Always `Get` for this operation.
    pub fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Always `None`; the lookup sends no body.
    pub fn content_type(&self) -> Option<&'static str> {
        None
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Build the country-lookup request against `base_uri`.
    pub fn build_request(&self, base_uri: &str, settings: &ClientSettings) -> HttpRequest {
        let base = base_uri.trim_end_matches('/');
        let uri = format!("{base}/{}/?app_id={}", self.country_code, settings.client_id);
        let headers = match self.content_type() {
            Some(content_type) => vec![("content-type".to_string(), content_type.to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method: self.http_method(),
            uri,
            headers,
            body: None,
        }
    }
}
