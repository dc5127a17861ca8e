//! Adapters layer
//!
//! Implementations of port traits.

pub mod placeholder;

pub use placeholder::PlaceholderBriefSource;
