//! Brief handlers
//!
//! Endpoints for reading research briefs.

use axum::{extract::State, Json};

use crate::domain::entities::BriefPayload;
use crate::error::AppError;
use crate::router::AppState;

/// GET /brief/latest
///
/// Returns the latest brief. Until a real source is configured this is the
/// placeholder brief with `generated_at: null`.
pub async fn get_latest_brief(
    State(state): State<AppState>,
) -> Result<Json<BriefPayload>, AppError> {
    tracing::info!("brief_requested");

    let brief = state.brief_service.latest().await?;
    Ok(Json(brief))
}
