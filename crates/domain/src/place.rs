//! Place — a parent entity that reviews attach to.
//!
//! Places are owned by a wider system; this service only needs their
//! identity and enough shape to provision them for tests and seeding.

use serde::{Deserialize, Serialize};

use crate::error::{StayHubError, ValidationError};
use crate::id::PlaceId;
use crate::time::{self, Timestamp};

/// A place that users can review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), StayHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    name: Option<String>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Place`].
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Place, StayHubError> {
        let now = time::now();
        let place = Place {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        place.validate()?;
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_place_when_name_provided() {
        let place = Place::builder().name("Secluded Cabin").build().unwrap();
        assert_eq!(place.name, "Secluded Cabin");
        assert_eq!(place.created_at, place.updated_at);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Place::builder().build();
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::MissingName))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let place = Place::builder().name("Beach House").build().unwrap();
        let json = serde_json::to_string(&place).unwrap();
        let parsed: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, place.id);
        assert_eq!(parsed.name, place.name);
    }
}
