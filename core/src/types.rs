//! Domain DTOs for the catalog API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A catalog market returned by the country endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    #[serde(rename = "countrycode")]
    pub country_code: String,
}
