//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod brief;

pub use brief::{BriefFormat, BriefPayload};
