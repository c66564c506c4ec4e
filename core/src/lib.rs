//! Asynchronous client SDK for the music-catalog web API.
//!
//! # Overview
//! Issues HTTP requests against the remote catalog and maps well-known
//! status codes to typed errors. The public entry point is
//! `CountryResolver`, which answers whether the catalog serves a given
//! country code.
//!
//! # Design
//! - `CountryResolver` is stateless after construction — it holds only the
//!   client settings and a request handler.
//! - Each operation is described by a command value with a fixed HTTP method
//!   and content type, and executed through the `RequestHandler` seam, so
//!   tests swap the network for canned responses.
//! - Transport types use owned `String` / `Vec` fields; a `ResponseInfo`
//!   carries the final request URI and response headers of each exchange.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod command;
pub mod error;
pub mod handler;
pub mod http;
pub mod types;

pub use client::CountryResolver;
pub use command::{ClientSettings, CountryResolverCommand, DEFAULT_BASE_URI};
pub use error::{ApiError, HandlerError};
pub use handler::{ApiRequestHandler, RequestHandler};
pub use http::{HttpMethod, HttpRequest, RawResponse, ResponseInfo};
pub use types::Country;
