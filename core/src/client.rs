//! Country availability resolver for the catalog API.
//!
//! # Design
//! `CountryResolver` validates its inputs, builds a `CountryResolverCommand`
//! per call, and delegates the round-trip to its `RequestHandler`. Status
//! interpretation lives here: 200 with a country payload means available,
//! 404 with the catalog's not-found body means unavailable, everything else
//! is an error. The resolver is stateless after construction.

use crate::command::{ClientSettings, CountryResolverCommand};
use crate::error::{ApiError, HandlerError};
use crate::handler::{ApiRequestHandler, RequestHandler};
use crate::types::Country;

/// Checks whether the catalog serves a given country.
pub struct CountryResolver {
    settings: ClientSettings,
    handler: Box<dyn RequestHandler>,
}

impl std::fmt::Debug for CountryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CountryResolver {
    /// Build a resolver with the default network-backed handler.
    ///
    /// Fails with `ApiError::CredentialsRequired` when `client_id` is empty.
    pub fn new(client_id: &str) -> Result<Self, ApiError> {
        Self::with_handler(client_id, Box::new(ApiRequestHandler::new()))
    }

    /// Build a resolver around an injected handler.
    pub fn with_handler(
        client_id: &str,
        handler: Box<dyn RequestHandler>,
    ) -> Result<Self, ApiError> {
        if client_id.trim().is_empty() {
            return Err(ApiError::CredentialsRequired);
        }
        Ok(Self {
            settings: ClientSettings {
                client_id: client_id.to_string(),
                country_code: None,
                country_code_from_locale: false,
            },
            handler,
        })
    }

    /// The handler this resolver dispatches through.
    pub fn handler(&self) -> &dyn RequestHandler {
        self.handler.as_ref()
    }

    /// Check whether the catalog is available in `country_code`.
    ///
    /// Returns `Ok(false)` when the service does not cover the country; all
    /// other failures map to the `ApiError` taxonomy. No caching, no retry.
    pub async fn check_availability(&self, country_code: &str) -> Result<bool, ApiError> {
        if country_code.trim().is_empty() {
            return Err(ApiError::InvalidCountryCode);
        }

        let command = CountryResolverCommand::new(country_code);
        match self.handler.execute(&command, &self.settings).await {
            Ok(response) => match serde_json::from_str::<Country>(&response.body) {
                Ok(_) => Ok(true),
                Err(e) => Err(ApiError::CallFailed {
                    status: Some(response.status),
                    detail: format!("unexpected country payload: {e}"),
                }),
            },
            // An unsupported country comes back as 404 with a JSON body; a
            // bodiless 404 is a failed call, not an answer.
            Err(HandlerError::Status { status: 404, body }) => {
                if serde_json::from_str::<serde_json::Value>(&body).is_ok() {
                    Ok(false)
                } else {
                    log::warn!("country lookup returned 404 with an unparsable body");
                    Err(ApiError::CallFailed {
                        status: Some(404),
                        detail: "not-found response carried no parsable body".to_string(),
                    })
                }
            }
            Err(HandlerError::Status { status: 403, .. }) => Err(ApiError::InvalidApiCredentials),
            Err(HandlerError::Status { status, body }) => Err(ApiError::CallFailed {
                status: Some(status),
                detail: body,
            }),
            Err(HandlerError::Transport(detail)) => Err(ApiError::CallFailed {
                status: None,
                detail,
            }),
        }
    }
}
