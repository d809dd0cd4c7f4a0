//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StayHubError`] via `#[from]` / `From` impls. The HTTP adapter maps the
//! three top-level variants onto status codes (400, 404, 500).

/// Top-level error for the stayhub workspace.
#[derive(Debug, thiserror::Error)]
pub enum StayHubError {
    /// The client payload was malformed or incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed; details are adapter-specific.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client payload validation failures.
///
/// Display strings are part of the API contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Request body was absent or did not parse as a JSON object.
    #[error("Not a JSON")]
    NotAJson,
    /// Review create payload lacked a usable `user_id`.
    #[error("Missing user_id")]
    MissingUserId,
    /// Review create payload lacked a usable `text`.
    #[error("Missing text")]
    MissingText,
    /// Review was constructed without a parent place.
    #[error("Missing place_id")]
    MissingPlaceId,
    /// Place was constructed without a name.
    #[error("Missing name")]
    MissingName,
    /// User was constructed without an email.
    #[error("Missing email")]
    MissingEmail,
}

/// A referenced entity was not found in storage.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Place"`, `"User"`, `"Review"`.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}
