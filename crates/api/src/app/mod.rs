//! Axum router wiring.
//!
//! - `routes/`: handlers, one file per area
//! - `dto.rs`: request bodies that are not engine types
//! - `errors.rs`: consistent JSON error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use farmwise_advisor::AdvisoryEngine;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(engine: AdvisoryEngine) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(engine)))
        .layer(ServiceBuilder::new())
}
