//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reviews;

use axum::Router;
use axum::routing::get;

use stayhub_app::ports::{PlaceRepository, ReviewRepository, UserRepository};

use crate::state::AppState;

/// Build the review API sub-router.
pub fn routes<PR, UR, RR>() -> Router<AppState<PR, UR, RR>>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/places/{place_id}/reviews",
            get(reviews::list::<PR, UR, RR>).post(reviews::create::<PR, UR, RR>),
        )
        .route(
            "/reviews/{review_id}",
            get(reviews::get::<PR, UR, RR>)
                .put(reviews::update::<PR, UR, RR>)
                .delete(reviews::delete::<PR, UR, RR>),
        )
}
