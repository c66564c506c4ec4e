//! Availability checks against the live mock server.
//!
//! # Design
//! Starts the mock catalog server on a random port, then drives the
//! production `ApiRequestHandler` over real HTTP. Validates that request
//! building, status mapping, and payload parsing work end-to-end with the
//! actual server.

use catalog_core::{
    ApiError, ApiRequestHandler, ClientSettings, CountryResolver, CountryResolverCommand,
    RequestHandler,
};

/// Boot the mock server on a random port and return the API root to use.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}/1.x")
}

fn resolver(base_uri: &str, client_id: &str) -> CountryResolver {
    let handler = ApiRequestHandler::with_base_uri(base_uri);
    CountryResolver::with_handler(client_id, Box::new(handler)).unwrap()
}

#[tokio::test]
async fn supported_country_is_available() {
    let base = start_server().await;
    let result = resolver(&base, "test").check_availability("gb").await;
    assert!(result.unwrap());
}

#[tokio::test]
async fn unsupported_country_is_unavailable() {
    let base = start_server().await;
    let result = resolver(&base, "test").check_availability("xx").await;
    assert!(!result.unwrap());
}

#[tokio::test]
async fn revoked_key_is_rejected() {
    let base = start_server().await;
    let err = resolver(&base, "invalid")
        .check_availability("gb")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidApiCredentials));
}

#[tokio::test]
async fn unreachable_server_is_a_failed_call() {
    // Nothing listens on port 1; the connection is refused before any
    // HTTP status exists.
    let err = resolver("http://127.0.0.1:1/1.x", "test")
        .check_availability("gb")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::CallFailed { status: None, .. }));
}

#[tokio::test]
async fn response_metadata_records_final_uri_and_headers() {
    let base = start_server().await;
    let handler = ApiRequestHandler::with_base_uri(&base);
    let settings = ClientSettings {
        client_id: "test".to_string(),
        country_code: None,
        country_code_from_locale: false,
    };

    let response = handler
        .execute(&CountryResolverCommand::new("gb"), &settings)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.info.response_uri().ends_with("/1.x/gb/?app_id=test"));
    assert!(response
        .info
        .headers()
        .iter()
        .any(|(name, _)| name == "content-type"));
}
