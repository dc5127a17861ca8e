//! Mock implementations of port traits

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::BriefPayload;
use crate::domain::ports::BriefSource;
use crate::error::DomainError;

// ============================================================================
// Static Brief Source
// ============================================================================

/// Always returns the same brief and counts calls
pub struct StaticBriefSource {
    brief: BriefPayload,
    calls: AtomicUsize,
}

impl StaticBriefSource {
    pub fn new(brief: BriefPayload) -> Self {
        Self {
            brief,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BriefSource for StaticBriefSource {
    async fn latest(&self) -> anyhow::Result<BriefPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.brief.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

// ============================================================================
// Failing Brief Source
// ============================================================================

enum Failure {
    Domain(DomainError),
    Unclassified(String),
}

/// Always fails with the configured error
pub struct FailingBriefSource {
    failure: Failure,
}

impl FailingBriefSource {
    /// Fail with a classified domain error
    pub fn domain(err: DomainError) -> Self {
        Self {
            failure: Failure::Domain(err),
        }
    }

    /// Fail with an error that is not a `DomainError`
    pub fn unclassified(detail: impl Into<String>) -> Self {
        Self {
            failure: Failure::Unclassified(detail.into()),
        }
    }
}

#[async_trait]
impl BriefSource for FailingBriefSource {
    async fn latest(&self) -> anyhow::Result<BriefPayload> {
        match &self.failure {
            Failure::Domain(err) => Err(err.clone().into()),
            Failure::Unclassified(detail) => {
                Err(anyhow::anyhow!("{}", detail).context("loading brief from upstream"))
            }
        }
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
