//! Shared application state for axum handlers.

use std::sync::Arc;

use stayhub_app::ports::{PlaceRepository, ReviewRepository, UserRepository};
use stayhub_app::services::review_service::ReviewService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<PR, UR, RR> {
    /// Review CRUD service.
    pub review_service: Arc<ReviewService<PR, UR, RR>>,
}

impl<PR, UR, RR> Clone for AppState<PR, UR, RR> {
    fn clone(&self) -> Self {
        Self {
            review_service: Arc::clone(&self.review_service),
        }
    }
}

impl<PR, UR, RR> AppState<PR, UR, RR>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(review_service: ReviewService<PR, UR, RR>) -> Self {
        Self {
            review_service: Arc::new(review_service),
        }
    }
}
