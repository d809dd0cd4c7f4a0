//! Application services — one per aggregate.

pub mod review_service;
