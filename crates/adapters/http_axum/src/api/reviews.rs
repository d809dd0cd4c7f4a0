//! JSON REST handlers for reviews.
//!
//! Request bodies are parsed by hand rather than through typed extractors:
//! the API contract fixes both the error messages (`Not a JSON`,
//! `Missing user_id`, `Missing text`) and the order in which body checks
//! interleave with entity existence checks, which a rejection-based
//! extractor cannot reproduce.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use stayhub_app::ports::{PlaceRepository, ReviewRepository, UserRepository};
use stayhub_app::services::review_service::NewReview;
use stayhub_domain::error::{NotFoundError, ValidationError};
use stayhub_domain::id::{PlaceId, ReviewId, UserId};
use stayhub_domain::review::Review;
use stayhub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// External JSON representation of a review.
///
/// Key set is part of the API contract, including the `__class__` marker
/// carried over from the generic-object-store lineage of the API.
#[derive(Serialize)]
pub struct ReviewRepr {
    #[serde(rename = "__class__")]
    class: &'static str,
    id: ReviewId,
    place_id: PlaceId,
    user_id: UserId,
    text: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<Review> for ReviewRepr {
    fn from(review: Review) -> Self {
        Self {
            class: "Review",
            id: review.id,
            place_id: review.place_id,
            user_id: review.user_id,
            text: review.text,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ReviewRepr>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ReviewRepr>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<ReviewRepr>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<ReviewRepr>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    /// Deletion returns an empty JSON object with 200, not 204.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (StatusCode::OK, Json(Map::<String, Value>::new())).into_response(),
        }
    }
}

/// Parse a request body into a JSON object, if it is one.
fn parse_object(body: &Bytes) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Path ids are opaque: one that does not parse as a UUID is
/// indistinguishable from an absent entity.
fn parse_place_id(raw: &str) -> Result<PlaceId, ApiError> {
    PlaceId::from_str(raw).map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "Place",
            id: raw.to_owned(),
        })
    })
}

fn parse_review_id(raw: &str) -> Result<ReviewId, ApiError> {
    ReviewId::from_str(raw).map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "Review",
            id: raw.to_owned(),
        })
    })
}

/// `GET /places/{place_id}/reviews`
pub async fn list<PR, UR, RR>(
    State(state): State<AppState<PR, UR, RR>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&place_id)?;
    let reviews = state.review_service.list_for_place(place_id).await?;
    Ok(ListResponse::Ok(Json(
        reviews.into_iter().map(ReviewRepr::from).collect(),
    )))
}

/// `POST /places/{place_id}/reviews`
///
/// Body checks run before any entity lookup: a body that is not a JSON
/// object fails with `Not a JSON`, a body without `user_id` with
/// `Missing user_id`. Place and user existence and the `text` check are
/// the service's concern and keep its ordering. Any client-supplied
/// `place_id` in the body is ignored; the path is authoritative.
pub async fn create<PR, UR, RR>(
    State(state): State<AppState<PR, UR, RR>>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let payload = parse_object(&body).ok_or(ValidationError::NotAJson)?;

    let user_id = match payload.get("user_id") {
        None => return Err(ValidationError::MissingUserId.into()),
        Some(Value::String(s)) => s.clone(),
        // A non-string user_id can never resolve; let the service surface
        // it as an unknown user.
        Some(other) => other.to_string(),
    };
    let text = payload
        .get("text")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    let place_id = parse_place_id(&place_id)?;
    let review = state
        .review_service
        .create_review(place_id, NewReview { user_id, text })
        .await?;
    Ok(CreateResponse::Created(Json(ReviewRepr::from(review))))
}

/// `GET /reviews/{review_id}`
pub async fn get<PR, UR, RR>(
    State(state): State<AppState<PR, UR, RR>>,
    Path(review_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = parse_review_id(&review_id)?;
    let review = state.review_service.get_review(review_id).await?;
    Ok(GetResponse::Ok(Json(ReviewRepr::from(review))))
}

/// `PUT /reviews/{review_id}`
///
/// The body is parsed leniently here and handed to the service as an
/// `Option`: a missing review must win over a malformed body.
pub async fn update<PR, UR, RR>(
    State(state): State<AppState<PR, UR, RR>>,
    Path(review_id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = parse_review_id(&review_id)?;
    let patch = parse_object(&body);
    let review = state
        .review_service
        .update_review(review_id, patch.as_ref())
        .await?;
    Ok(UpdateResponse::Ok(Json(ReviewRepr::from(review))))
}

/// `DELETE /reviews/{review_id}`
pub async fn delete<PR, UR, RR>(
    State(state): State<AppState<PR, UR, RR>>,
    Path(review_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = parse_review_id(&review_id)?;
    state.review_service.delete_review(review_id).await?;
    Ok(DeleteResponse::Ok)
}
