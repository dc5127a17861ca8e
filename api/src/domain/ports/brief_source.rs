//! Brief source port trait
//!
//! Defines where the content for `/brief/latest` comes from. An ingestion
//! or summarization pipeline plugs in here.

use async_trait::async_trait;

use crate::domain::entities::BriefPayload;

/// Source of the latest brief.
///
/// Implementations signal classified failures by returning a
/// `DomainError` inside the `anyhow::Error`; anything else is treated as
/// an unclassified fault at the HTTP boundary.
#[async_trait]
pub trait BriefSource: Send + Sync {
    /// Fetch the most recent brief
    async fn latest(&self) -> anyhow::Result<BriefPayload>;

    /// Short name used in log events
    fn name(&self) -> &'static str;
}
