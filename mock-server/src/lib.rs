use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// A catalog market, as returned by the country endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub countrycode: String,
}

/// App key the server treats as revoked. Requests carrying it get 403.
pub const REVOKED_APP_ID: &str = "invalid";

pub type Catalog = Arc<HashMap<&'static str, &'static str>>;

fn markets() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("gb", "United Kingdom"),
        ("de", "Germany"),
        ("in", "India"),
        ("mx", "Mexico"),
    ])
}

pub fn app() -> Router {
    let catalog: Catalog = Arc::new(markets());
    Router::new()
        .route("/1.x/{country}/", get(resolve_country))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn resolve_country(
    State(catalog): State<Catalog>,
    Path(country): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let authorized = params
        .get("app_id")
        .is_some_and(|id| !id.is_empty() && id != REVOKED_APP_ID);
    if !authorized {
        return StatusCode::FORBIDDEN.into_response();
    }

    let code = country.to_lowercase();
    match catalog.get(code.as_str()) {
        Some(name) => Json(Country {
            name: (*name).to_string(),
            countrycode: code,
        })
        .into_response(),
        None => (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response(),
    }
}
