//! # stayhub-app
//!
//! Application layer for stayhub — use-cases and port definitions.
//!
//! ## Responsibilities
//! - Define the repository port traits adapters implement
//! - Hold the review validation/mutation contract in [`services::review_service`]
//!
//! ## Dependency rule
//! Depends only on `stayhub-domain`. Adapters depend on this crate for the
//! port traits; this crate never references an adapter.

pub mod ports;
pub mod services;
