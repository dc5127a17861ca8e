//! Service metadata and fallback handlers

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;

use crate::error::{AppError, DomainError};
use crate::router::AppState;

/// Response body for service metadata
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
}

/// GET /info
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> AppError {
    DomainError::not_found(format!("No route for {}", uri.path())).into()
}

/// Fallback for known routes hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
