//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: the brief payload and its format tag
//! - `ports`: traits for where briefs come from

pub mod entities;
pub mod ports;
