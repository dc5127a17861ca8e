//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod brief_service;

pub use brief_service::BriefService;
