//! # stayhub-domain
//!
//! Pure domain model for the stayhub review service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Places** (parent entities that reviews attach to)
//! - Define **Users** (review authors)
//! - Define **Reviews** (user-authored text tied to one place and one user)
//! - Contain all invariant enforcement, including the partial-update
//!   field-filtering contract
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod place;
pub mod review;
pub mod user;
