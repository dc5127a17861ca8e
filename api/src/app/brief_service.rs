//! Brief service
//!
//! Serves the latest research brief from whichever `BriefSource` the
//! service was started with.

use std::sync::Arc;

use crate::domain::entities::BriefPayload;
use crate::domain::ports::BriefSource;
use crate::error::AppError;

/// Service for fetching briefs
pub struct BriefService {
    source: Arc<dyn BriefSource>,
}

impl BriefService {
    pub fn new(source: Arc<dyn BriefSource>) -> Self {
        Self { source }
    }

    /// Fetch the latest brief. Source errors are classified into `AppError`
    /// and left for the HTTP boundary to report.
    pub async fn latest(&self) -> Result<BriefPayload, AppError> {
        let brief = self.source.latest().await?;

        tracing::debug!(
            source = self.source.name(),
            format = %brief.format,
            placeholder = brief.is_placeholder(),
            "brief_loaded"
        );

        Ok(brief)
    }
}
