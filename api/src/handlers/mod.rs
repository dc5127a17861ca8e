//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod brief;
pub mod health;
pub mod meta;

pub use brief::get_latest_brief;
pub use health::health;
pub use meta::{info, method_not_allowed, not_found};
