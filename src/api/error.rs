//! Mapping of failures onto the JSON error envelope.

use crate::config::RuntimeMode;
use crate::task::{
    services::{ErrorKind, TaskServiceError},
    validation::{FieldIssue, ValidationErrors},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Envelope name for structural request failures.
pub const SCHEMA_ERROR_NAME: &str = "Validation Error";

/// Message returned for internal failures in production mode.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Failures surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body, query or parameters failed the input schema.
    #[error("invalid request: {0}")]
    Schema(ValidationErrors),

    /// A path identifier that cannot name any task.
    #[error("task with id {0} not found")]
    UnknownTask(String),

    /// A use-case failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl ApiError {
    /// Returns the taxonomy kind of the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Schema(_) => ErrorKind::Validation,
            Self::UnknownTask(_) => ErrorKind::NotFound,
            Self::Service(err) => err.kind(),
        }
    }

    /// Pairs the failure with the mode that decides what clients may see.
    #[must_use]
    pub const fn in_mode(self, mode: RuntimeMode) -> ApiRejection {
        ApiRejection { error: self, mode }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        Self::Schema(err)
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldIssue]>,
}

/// An [`ApiError`] ready to be rendered for a given [`RuntimeMode`].
#[derive(Debug)]
pub struct ApiRejection {
    error: ApiError,
    mode: RuntimeMode,
}

impl ApiRejection {
    /// Returns the underlying failure.
    #[must_use]
    pub const fn error(&self) -> &ApiError {
        &self.error
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let kind = self.error.kind();
        let status =
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        log_failure(&self.error, kind);

        let body = match &self.error {
            ApiError::Schema(errors) => ErrorBody {
                error: SCHEMA_ERROR_NAME,
                message: errors.message().to_owned(),
                details: Some(errors.details()),
            },
            ApiError::Service(TaskServiceError::Validation(errors)) => ErrorBody {
                error: kind.name(),
                message: errors.message().to_owned(),
                details: Some(errors.details()).filter(|details| !details.is_empty()),
            },
            _ if kind == ErrorKind::Internal && self.mode.is_production() => ErrorBody {
                error: kind.name(),
                message: GENERIC_INTERNAL_MESSAGE.to_owned(),
                details: None,
            },
            other => ErrorBody {
                error: kind.name(),
                message: other.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

fn log_failure(err: &ApiError, kind: ErrorKind) {
    match kind {
        ErrorKind::Validation | ErrorKind::NotFound => debug!(error = %err, "request rejected"),
        ErrorKind::ServiceUnavailable => warn!(error = ?err, "dependency unavailable"),
        ErrorKind::Internal => error!(error = ?err, "request failed"),
    }
}
