//! `SQLite` implementation of [`PlaceRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::PlaceRepository;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::PlaceId;
use stayhub_domain::place::Place;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Place`].
struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = PlaceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Place {
            id,
            name,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO places (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn create(&self, place: Place) -> Result<Place, StayHubError> {
        sqlx::query(INSERT)
            .bind(place.id.to_string())
            .bind(&place.name)
            .bind(place.created_at.to_rfc3339())
            .bind(place.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, StayHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}
