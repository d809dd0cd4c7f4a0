//! `SQLite` implementation of [`UserRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::UserRepository;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::UserId;
use stayhub_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let first_name: Option<String> = row.try_get("first_name")?;
        let last_name: Option<String> = row.try_get("last_name")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(User {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (id, email, first_name, last_name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> Result<User, StayHubError> {
        sqlx::query(INSERT)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(user.first_name.as_deref())
            .bind(user.last_name.as_deref())
            .bind(user.created_at.to_rfc3339())
            .bind(user.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StayHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    fn test_user() -> User {
        User::builder()
            .email("kim@example.com")
            .first_name("Kim")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_user_when_valid() {
        let repo = setup().await;
        let user = test_user();
        let id = user.id;

        repo.create(user).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.email, "kim@example.com");
        assert_eq!(fetched.first_name.as_deref(), Some("Kim"));
        assert!(fetched.last_name.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_user_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(UserId::new()).await.unwrap();
        assert!(result.is_none());
    }
}
