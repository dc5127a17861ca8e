//! Brief domain entity
//!
//! A brief is the content payload served by `/brief/latest`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder served until a real brief source is wired in
pub const PLACEHOLDER_BRIEF: &str = "\
# AI Research Brief - Placeholder

Welcome to OmniAgent! This is a placeholder brief.

## Coming Soon
- Arxiv paper aggregation
- AI-generated summaries
- Multi-source research tracking

Stay tuned for updates!";

/// How `BriefPayload::content` should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BriefFormat {
    Markdown,
    #[serde(rename = "text")]
    PlainText,
}

impl std::fmt::Display for BriefFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BriefFormat::Markdown => write!(f, "markdown"),
            BriefFormat::PlainText => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for BriefFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(BriefFormat::Markdown),
            "text" | "plain" => Ok(BriefFormat::PlainText),
            _ => Err(format!("Unknown brief format: {}", s)),
        }
    }
}

/// A research brief. `generated_at` is `None` only for placeholder briefs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefPayload {
    pub content: String,
    pub format: BriefFormat,
    pub generated_at: Option<DateTime<Utc>>,
}

impl BriefPayload {
    pub fn placeholder() -> Self {
        Self {
            content: PLACEHOLDER_BRIEF.to_string(),
            format: BriefFormat::Markdown,
            generated_at: None,
        }
    }

    /// A brief produced by a generation run at `generated_at`
    #[allow(dead_code)]
    pub fn generated(
        content: impl Into<String>,
        format: BriefFormat,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content: content.into(),
            format,
            generated_at: Some(generated_at),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.generated_at.is_none()
    }
}
