//! Route table and middleware stack

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::BriefService;
use crate::config::Config;
use crate::domain::ports::BriefSource;
use crate::error;
use crate::handlers;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub brief_service: Arc<BriefService>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, brief_source: Arc<dyn BriefSource>) -> Self {
        Self {
            brief_service: Arc::new(BriefService::new(brief_source)),
            config,
        }
    }
}

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .route("/health", get(handlers::health))
            .route("/info", get(handlers::info))
            .route("/brief/latest", get(handlers::get_latest_brief)),
    )
    .with_state(state)
}

/// Wrap routes in the error translator and request tracing. Layers run
/// outermost first: trace, failure logging, panic catching, handler.
/// Failures are logged by `log_failures` only; the trace layer's own
/// failure event is disabled.
pub fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    routes
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn(error::log_failures))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http().on_failure(()))
}
