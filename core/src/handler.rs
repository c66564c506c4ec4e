//! The request-handler seam and its production implementation.
//!
//! # Design
//! `RequestHandler` is the injection point for tests: the resolver owns a
//! boxed handler and never talks to the network directly. The production
//! `ApiRequestHandler` executes requests with reqwest and reports
//! non-success statuses as `HandlerError::Status`, leaving interpretation
//! to the client layer.

use async_trait::async_trait;

use crate::command::{ClientSettings, CountryResolverCommand, DEFAULT_BASE_URI};
use crate::error::HandlerError;
use crate::http::{HttpMethod, RawResponse, ResponseInfo};

/// Executes catalog API commands.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Short identifier of the handler implementation.
    fn name(&self) -> &'static str;

    /// Execute `command` with `settings`, returning the raw response for
    /// success statuses and `HandlerError::Status` for everything else.
    async fn execute(
        &self,
        command: &CountryResolverCommand,
        settings: &ClientSettings,
    ) -> Result<RawResponse, HandlerError>;
}

/// Network-backed handler used when no other handler is injected.
#[derive(Debug, Clone)]
pub struct ApiRequestHandler {
    base_uri: String,
    http: reqwest::Client,
}

impl ApiRequestHandler {
    pub fn new() -> Self {
        Self::with_base_uri(DEFAULT_BASE_URI)
    }

    /// Point the handler at a different API root, e.g. a local mock server.
    pub fn with_base_uri(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ApiRequestHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestHandler for ApiRequestHandler {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn execute(
        &self,
        command: &CountryResolverCommand,
        settings: &ClientSettings,
    ) -> Result<RawResponse, HandlerError> {
        let request = command.build_request(&self.base_uri, settings);
        log::debug!("{:?} {}", request.method, request.uri);

        let mut builder = self.http.request(method_of(request.method), request.uri.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HandlerError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let response_uri = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| HandlerError::Transport(e.to_string()))?;

        log::debug!("{status} from {response_uri}");
        if !(200..300).contains(&status) {
            return Err(HandlerError::Status { status, body });
        }

        Ok(RawResponse {
            status,
            body,
            info: ResponseInfo::new(response_uri, headers),
        })
    }
}

fn method_of(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
