//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use stayhub_app::ports::{PlaceRepository, ReviewRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the review API at the root and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<PR, UR, RR>(state: AppState<PR, UR, RR>) -> Router
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
