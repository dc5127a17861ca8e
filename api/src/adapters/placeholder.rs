//! Placeholder brief source
//!
//! Serves the static placeholder brief. Never fails.

use async_trait::async_trait;

use crate::domain::entities::BriefPayload;
use crate::domain::ports::BriefSource;

#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderBriefSource;

#[async_trait]
impl BriefSource for PlaceholderBriefSource {
    async fn latest(&self) -> anyhow::Result<BriefPayload> {
        Ok(BriefPayload::placeholder())
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}
