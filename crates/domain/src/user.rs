//! User — the author of a review.
//!
//! Users are owned by a wider system; reviews reference them by id.

use serde::{Deserialize, Serialize};

use crate::error::{StayHubError, ValidationError};
use crate::id::UserId;
use crate::time::{self, Timestamp};

/// A registered user who can author reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] when `email` is empty.
    pub fn validate(&self) -> Result<(), StayHubError> {
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if `email` is missing or empty.
    pub fn build(self) -> Result<User, StayHubError> {
        let now = time::now();
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: now,
            updated_at: now,
        };
        user.validate()?;
        Ok(user)
    }
}
