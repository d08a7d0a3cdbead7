use axum::Router;

pub mod advisory;
pub mod catalog;
pub mod system;

/// Router for every engine-backed endpoint; expects an `AdvisoryEngine` extension.
pub fn router() -> Router {
    Router::new()
        .nest("/advisory", advisory::router())
        .nest("/catalog", catalog::router())
}
