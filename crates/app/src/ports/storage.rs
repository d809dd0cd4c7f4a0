//! Storage port — repository traits for persistence.
//!
//! One typed repository per entity kind replaces the stringly-typed
//! `storage.get("Review", id)` style of generic object stores. Trait methods
//! return `impl Future` so implementations stay object-safe-free and
//! zero-cost; adapters may use plain `async fn`.

use std::future::Future;

use stayhub_domain::error::StayHubError;
use stayhub_domain::id::{PlaceId, ReviewId, UserId};
use stayhub_domain::place::Place;
use stayhub_domain::review::Review;
use stayhub_domain::user::User;

/// Persistence operations for [`Place`].
pub trait PlaceRepository {
    /// Persist a new place.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, StayHubError>> + Send;

    /// Look up a place by id.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, StayHubError>> + Send;
}

/// Persistence operations for [`User`].
pub trait UserRepository {
    /// Persist a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, StayHubError>> + Send;

    /// Look up a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, StayHubError>> + Send;
}

/// Persistence operations for [`Review`].
pub trait ReviewRepository {
    /// Persist a new review.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, StayHubError>> + Send;

    /// Look up a review by id.
    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, StayHubError>> + Send;

    /// All reviews attached to the given place.
    fn find_by_place_id(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, StayHubError>> + Send;

    /// Persist field changes to an existing review.
    fn update(&self, review: Review) -> impl Future<Output = Result<Review, StayHubError>> + Send;

    /// Remove a review by id.
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), StayHubError>> + Send;
}
