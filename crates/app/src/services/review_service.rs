//! Review service — use-cases for listing, creating, and mutating reviews.
//!
//! Owns the validation sequence for review creation and the allow-list
//! patch semantics for partial update. Repositories are injected; the
//! service holds no state of its own.

use std::str::FromStr;

use serde_json::{Map, Value};

use stayhub_domain::error::{NotFoundError, StayHubError, ValidationError};
use stayhub_domain::id::{PlaceId, ReviewId, UserId};
use stayhub_domain::review::Review;

use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Fields accepted when creating a review.
///
/// `user_id` stays a raw string here: an unparseable id is
/// indistinguishable from an unknown user and must surface as not-found,
/// not as a malformed-payload error.
#[derive(Debug)]
pub struct NewReview {
    pub user_id: String,
    pub text: Option<String>,
}

/// Application service for review CRUD operations.
pub struct ReviewService<PR, UR, RR> {
    places: PR,
    users: UR,
    reviews: RR,
}

impl<PR, UR, RR> ReviewService<PR, UR, RR>
where
    PR: PlaceRepository,
    UR: UserRepository,
    RR: ReviewRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: PR, users: UR, reviews: RR) -> Self {
        Self {
            places,
            users,
            reviews,
        }
    }

    /// List all reviews attached to a place.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when the place does not exist,
    /// or a storage error from the repositories.
    pub async fn list_for_place(&self, place_id: PlaceId) -> Result<Vec<Review>, StayHubError> {
        self.ensure_place(place_id).await?;
        self.reviews.find_by_place_id(place_id).await
    }

    /// Create a review under a place.
    ///
    /// Checks run in a fixed order, short-circuiting on the first failure:
    /// the place must exist, the referenced user must exist, and the draft
    /// must carry a `text`. The parent place comes from the caller's path,
    /// never from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] for a missing place or user,
    /// [`StayHubError::Validation`] for a missing `text`, or a storage
    /// error from the repositories.
    pub async fn create_review(
        &self,
        place_id: PlaceId,
        draft: NewReview,
    ) -> Result<Review, StayHubError> {
        self.ensure_place(place_id).await?;

        let user_id = UserId::from_str(&draft.user_id).map_err(|_| NotFoundError {
            entity: "User",
            id: draft.user_id.clone(),
        })?;
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "User",
                id: user_id.to_string(),
            })?;

        let text = draft.text.ok_or(ValidationError::MissingText)?;

        let review = Review::builder()
            .place_id(place_id)
            .user_id(user_id)
            .text(text)
            .build()?;

        tracing::debug!(review_id = %review.id, place_id = %place_id, "creating review");
        self.reviews.create(review).await
    }

    /// Look up a review by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when no review with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, StayHubError> {
        self.reviews.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Review",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Apply a client patch to an existing review.
    ///
    /// `patch` is `None` when the request body did not parse as a JSON
    /// object; the existence check still runs first, so an unknown review
    /// with a malformed body surfaces as not-found rather than bad-request.
    /// Immutable and unrecognized keys are silently discarded by
    /// [`Review::apply_update`]; `updated_at` is refreshed and the result
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when the review does not exist,
    /// [`StayHubError::Validation`] when `patch` is `None`, or a storage
    /// error from the repository.
    pub async fn update_review(
        &self,
        id: ReviewId,
        patch: Option<&Map<String, Value>>,
    ) -> Result<Review, StayHubError> {
        let mut review = self.get_review(id).await?;
        let patch = patch.ok_or(ValidationError::NotAJson)?;
        review.apply_update(patch);
        self.reviews.update(review).await
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when the review does not exist,
    /// or a storage error from the repository.
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), StayHubError> {
        let review = self.get_review(id).await?;
        tracing::debug!(review_id = %review.id, "deleting review");
        self.reviews.delete(review.id).await
    }

    async fn ensure_place(&self, place_id: PlaceId) -> Result<(), StayHubError> {
        self.places
            .get_by_id(place_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Place",
                id: place_id.to_string(),
            })?;
        Ok(())
    }
}
