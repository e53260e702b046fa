//! People service library: a small REST API over a person record store.
//!
//! - [`domain`] holds the record type, error payload and store port.
//! - [`inbound`] adapts HTTP requests onto the port.
//! - [`outbound`] provides the PostgreSQL and in-memory stores.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and the route listing.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
