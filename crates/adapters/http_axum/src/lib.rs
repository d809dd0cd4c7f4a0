//! # stayhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the review REST API (`/places/{place_id}/reviews`,
//!   `/reviews/{review_id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses, including the exact
//!   validation error messages and status codes of the API contract
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits and services) and
//! `stayhub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
