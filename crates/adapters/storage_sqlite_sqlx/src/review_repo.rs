//! `SQLite` implementation of [`ReviewRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::ReviewRepository;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::{PlaceId, ReviewId, UserId};
use stayhub_domain::review::Review;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let place_id: String = row.try_get("place_id")?;
        let user_id: String = row.try_get("user_id")?;
        let text: String = row.try_get("text")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = ReviewId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let place_id =
            PlaceId::from_str(&place_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let user_id =
            UserId::from_str(&user_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Review {
            id,
            place_id,
            user_id,
            text,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, place_id, user_id, text, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ?";

const UPDATE: &str = r"
    UPDATE reviews
    SET text = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, StayHubError> {
        sqlx::query(INSERT)
            .bind(review.id.to_string())
            .bind(review.place_id.to_string())
            .bind(review.user_id.to_string())
            .bind(&review.text)
            .bind(review.created_at.to_rfc3339())
            .bind(review.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, StayHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find_by_place_id(&self, place_id: PlaceId) -> Result<Vec<Review>, StayHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, review: Review) -> Result<Review, StayHubError> {
        // Only mutable and bookkeeping columns are written; the identity
        // and foreign-key columns never change after creation.
        sqlx::query(UPDATE)
            .bind(&review.text)
            .bind(review.updated_at.to_rfc3339())
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), StayHubError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place_repo::SqlitePlaceRepository;
    use crate::pool::Config;
    use crate::user_repo::SqliteUserRepository;
    use stayhub_app::ports::{PlaceRepository, UserRepository};
    use stayhub_domain::place::Place;
    use stayhub_domain::user::User;

    async fn setup() -> (SqliteReviewRepository, PlaceId, UserId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let place = Place::builder().name("Secluded Cabin").build().unwrap();
        let place_id = place.id;
        SqlitePlaceRepository::new(pool.clone())
            .create(place)
            .await
            .unwrap();

        let user = User::builder().email("kim@example.com").build().unwrap();
        let user_id = user.id;
        SqliteUserRepository::new(pool.clone())
            .create(user)
            .await
            .unwrap();

        (SqliteReviewRepository::new(pool), place_id, user_id)
    }

    fn test_review(place_id: PlaceId, user_id: UserId) -> Review {
        Review::builder()
            .place_id(place_id)
            .user_id(user_id)
            .text("Really nice place and really nice people. Secluded.")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_review_when_valid() {
        let (repo, place_id, user_id) = setup().await;
        let review = test_review(place_id, user_id);
        let id = review.id;

        repo.create(review).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.place_id, place_id);
        assert_eq!(fetched.user_id, user_id);
        assert_eq!(
            fetched.text,
            "Really nice place and really nice people. Secluded."
        );
    }

    #[tokio::test]
    async fn should_return_none_when_review_not_found() {
        let (repo, _place_id, _user_id) = setup().await;
        let result = repo.get_by_id(ReviewId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_find_reviews_by_place_id() {
        let (repo, place_id, user_id) = setup().await;
        repo.create(test_review(place_id, user_id)).await.unwrap();
        repo.create(test_review(place_id, user_id)).await.unwrap();

        let found = repo.find_by_place_id(place_id).await.unwrap();
        assert_eq!(found.len(), 2);

        let not_found = repo.find_by_place_id(PlaceId::new()).await.unwrap();
        assert!(not_found.is_empty());
    }

    #[tokio::test]
    async fn should_update_only_mutable_columns() {
        let (repo, place_id, user_id) = setup().await;
        let mut review = test_review(place_id, user_id);
        let id = review.id;
        repo.create(review.clone()).await.unwrap();

        review.text = "Even better the second time.".to_string();
        review.touch();
        repo.update(review).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.text, "Even better the second time.");
        assert_eq!(fetched.place_id, place_id);
        assert_eq!(fetched.user_id, user_id);
        assert!(fetched.updated_at >= fetched.created_at);
    }

    #[tokio::test]
    async fn should_delete_review_when_exists() {
        let (repo, place_id, user_id) = setup().await;
        let review = test_review(place_id, user_id);
        let id = review.id;
        repo.create(review).await.unwrap();

        repo.delete(id).await.unwrap();

        let result = repo.get_by_id(id).await.unwrap();
        assert!(result.is_none());
    }
}
