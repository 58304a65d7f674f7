//! Error taxonomy shared by the task use-cases.

use crate::task::{
    domain::TaskId,
    ports::{GenerationError, TaskRepositoryError},
    validation::ValidationErrors,
};
use thiserror::Error;

/// Failure category with an associated response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed a schema or precondition check.
    Validation,
    /// A referenced task does not exist.
    NotFound,
    /// An explicitly requested dependency (AI generation) failed.
    ServiceUnavailable,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code for the kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::ServiceUnavailable => 503,
            Self::Internal => 500,
        }
    }

    /// Returns the kind name reported to clients.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::NotFound => "NotFoundError",
            Self::ServiceUnavailable => "ServiceUnavailableError",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// Service-level errors for task use-cases.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation or a precondition failed.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No task exists with the given identifier.
    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// The generation capability failed during an explicit enhancement.
    #[error("AI enhancement service is unavailable")]
    ServiceUnavailable(#[from] GenerationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns the taxonomy kind of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task use-cases.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
