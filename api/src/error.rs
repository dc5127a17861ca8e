//! Error types for the OmniAgent API
//!
//! - `DomainError`: classified failures raised by domain code
//! - `AppError`: boundary type returned by HTTP handlers
//! - `ConfigError`: startup configuration failures
//!
//! `AppError` renders the client-facing response and attaches a
//! `FailureReport` to it; `log_failures` logs that report once, with the
//! request path, on the way out.

use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for anything that is not a domain error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Domain layer errors. `Other` is the base kind; the remaining variants
/// are its specializations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Other(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    StorageFailure(String),

    #[error("{0}")]
    IngestionFailure(String),
}

// Constructors for brief sources; the placeholder source never fails.
#[allow(dead_code)]
impl DomainError {
    pub fn other(msg: impl Into<String>) -> Self {
        DomainError::Other(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        DomainError::StorageFailure(msg.into())
    }

    pub fn ingestion(msg: impl Into<String>) -> Self {
        DomainError::IngestionFailure(msg.into())
    }

    /// Stable tag used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Other(_) => "domain_error",
            DomainError::NotFound(_) => "not_found",
            DomainError::StorageFailure(_) => "storage_failure",
            DomainError::IngestionFailure(_) => "ingestion_failure",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::Other(msg)
            | DomainError::NotFound(msg)
            | DomainError::StorageFailure(msg)
            | DomainError::IngestionFailure(msg) => msg,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            DomainError::Other(msg)
            | DomainError::NotFound(msg)
            | DomainError::StorageFailure(msg)
            | DomainError::IngestionFailure(msg) => msg,
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unhandled error: {0:#}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<DomainError>() {
            Ok(domain) => AppError::Domain(domain),
            Err(other) => AppError::Internal(other),
        }
    }
}

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How a failure is reported in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    NotFound,
    Rejected,
    Domain,
    Unclassified,
}

/// Server-side record of a failed request, carried in response extensions
#[derive(Debug, Clone)]
pub struct FailureReport {
    pub class: FailureClass,
    pub kind: &'static str,
    pub detail: String,
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn failure_response(status: StatusCode, error: String, report: FailureReport) -> Response {
    let mut response = (status, Json(ErrorResponse { error })).into_response();
    response.extensions_mut().insert(report);
    response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Domain(e @ DomainError::NotFound(_)) => {
                let kind = e.kind();
                let msg = e.into_message();
                failure_response(
                    StatusCode::NOT_FOUND,
                    msg.clone(),
                    FailureReport {
                        class: FailureClass::NotFound,
                        kind,
                        detail: msg,
                    },
                )
            }
            AppError::Domain(e) => {
                let kind = e.kind();
                let msg = e.into_message();
                failure_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg.clone(),
                    FailureReport {
                        class: FailureClass::Domain,
                        kind,
                        detail: msg,
                    },
                )
            }
            AppError::MethodNotAllowed => failure_response(
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED_MESSAGE.to_string(),
                FailureReport {
                    class: FailureClass::Rejected,
                    kind: "method_not_allowed",
                    detail: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
                },
            ),
            AppError::Internal(e) => failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
                FailureReport {
                    class: FailureClass::Unclassified,
                    kind: "unhandled",
                    detail: format!("{e:?}"),
                },
            ),
        }
    }
}

/// Panic handler for `CatchPanicLayer`. The panic is reported like any
/// other unclassified error.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    failure_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_MESSAGE.to_string(),
        FailureReport {
            class: FailureClass::Unclassified,
            kind: "panic",
            detail,
        },
    )
}

/// Emits one log event for every response that carries a `FailureReport`.
pub async fn log_failures(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    if let Some(report) = response.extensions().get::<FailureReport>() {
        match report.class {
            FailureClass::NotFound => {
                tracing::warn!(%path, error = %report.detail, "resource_not_found");
            }
            FailureClass::Rejected => {
                tracing::warn!(%path, kind = report.kind, "request_rejected");
            }
            FailureClass::Domain => {
                tracing::error!(%path, kind = report.kind, error = %report.detail, "domain_error");
            }
            FailureClass::Unclassified => {
                tracing::error!(%path, kind = report.kind, error = %report.detail, "unhandled_error");
            }
        }
    }

    response
}
