//! Review — user-authored text attached to exactly one place and one user.
//!
//! Carries the partial-update field-filtering contract: bookkeeping and
//! foreign-key fields are immutable after creation, and a client patch may
//! only touch the explicit allow-list of mutable fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StayHubError, ValidationError};
use crate::id::{PlaceId, ReviewId, UserId};
use crate::time::{self, Timestamp};

/// Fields a client may overwrite through a partial update.
///
/// Everything else — the immutable `id`, `place_id`, `user_id`,
/// `created_at`, `updated_at` as well as unrecognized keys — is silently
/// discarded from an incoming patch, never rejected.
const MUTABLE_FIELDS: [&str; 1] = ["text"];

/// A user-authored review of a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Review {
    /// Create a builder for constructing a [`Review`].
    #[must_use]
    pub fn builder() -> ReviewBuilder {
        ReviewBuilder::default()
    }

    /// Whether `field` may be set by a client patch.
    #[must_use]
    pub fn is_mutable_field(field: &str) -> bool {
        MUTABLE_FIELDS.contains(&field)
    }

    /// Apply a client patch, honoring the allow-list.
    ///
    /// Only recognized mutable fields carrying a value of the right type are
    /// applied; all other keys are ignored without error. `updated_at` is
    /// refreshed even when the patch applies nothing, matching a persisted
    /// no-op save.
    pub fn apply_update(&mut self, patch: &Map<String, Value>) {
        if let Some(text) = patch.get("text").and_then(Value::as_str) {
            self.text = text.to_owned();
        }
        self.touch();
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }
}

/// Step-by-step builder for [`Review`].
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    place_id: Option<PlaceId>,
    user_id: Option<UserId>,
    text: Option<String>,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn place_id(mut self, place_id: PlaceId) -> Self {
        self.place_id = Some(place_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Consume the builder, validate, and return a [`Review`].
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if `place_id`, `user_id`, or
    /// `text` is missing.
    pub fn build(self) -> Result<Review, StayHubError> {
        let place_id = self.place_id.ok_or(ValidationError::MissingPlaceId)?;
        let user_id = self.user_id.ok_or(ValidationError::MissingUserId)?;
        let text = self.text.ok_or(ValidationError::MissingText)?;

        let now = time::now();
        Ok(Review {
            id: self.id.unwrap_or_default(),
            place_id,
            user_id,
            text,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    fn valid_review() -> Review {
        Review::builder()
            .place_id(PlaceId::new())
            .user_id(UserId::new())
            .text("Great!")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_review_when_all_required_fields_provided() {
        let review = valid_review();
        assert_eq!(review.text, "Great!");
        assert_eq!(review.created_at, review.updated_at);
    }

    #[test]
    fn should_return_missing_user_id_when_builder_lacks_user() {
        let result = Review::builder()
            .place_id(PlaceId::new())
            .text("Great!")
            .build();
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::MissingUserId))
        ));
    }

    #[test]
    fn should_return_missing_text_when_builder_lacks_text() {
        let result = Review::builder()
            .place_id(PlaceId::new())
            .user_id(UserId::new())
            .build();
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::MissingText))
        ));
    }

    #[test]
    fn should_apply_text_from_patch() {
        let mut review = valid_review();
        review.apply_update(&patch(r#"{"text": "Even better"}"#));
        assert_eq!(review.text, "Even better");
    }

    #[test]
    fn should_ignore_immutable_fields_in_patch() {
        let mut review = valid_review();
        let original_id = review.id;
        let original_place = review.place_id;
        let original_user = review.user_id;
        let original_created = review.created_at;

        review.apply_update(&patch(
            r#"{
                "id": "11111111-1111-1111-1111-111111111111",
                "place_id": "22222222-2222-2222-2222-222222222222",
                "user_id": "33333333-3333-3333-3333-333333333333",
                "created_at": "2017-03-25T02:17:07Z",
                "updated_at": "2017-03-25T02:17:07Z",
                "text": "Updated"
            }"#,
        ));

        assert_eq!(review.id, original_id);
        assert_eq!(review.place_id, original_place);
        assert_eq!(review.user_id, original_user);
        assert_eq!(review.created_at, original_created);
        assert_eq!(review.text, "Updated");
    }

    #[test]
    fn should_expose_the_mutable_field_allow_list() {
        assert!(Review::is_mutable_field("text"));
        for reserved in ["id", "place_id", "user_id", "created_at", "updated_at"] {
            assert!(!Review::is_mutable_field(reserved));
        }
    }

    #[test]
    fn should_ignore_unknown_keys_in_patch() {
        let mut review = valid_review();
        review.apply_update(&patch(r#"{"rating": 5, "color": "blue"}"#));
        assert_eq!(review.text, "Great!");
    }

    #[test]
    fn should_ignore_non_string_text_in_patch() {
        let mut review = valid_review();
        review.apply_update(&patch(r#"{"text": 42}"#));
        assert_eq!(review.text, "Great!");
    }

    #[test]
    fn should_refresh_updated_at_on_patch() {
        let mut review = valid_review();
        let before = review.updated_at;
        review.apply_update(&patch(r#"{"text": "Changed"}"#));
        assert!(review.updated_at >= before);
        assert_eq!(review.created_at, before);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let review = valid_review();
        let json = serde_json::to_string(&review).unwrap();
        let parsed: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, review.id);
        assert_eq!(parsed.text, review.text);
    }
}
