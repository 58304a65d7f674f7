//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskCreationParams, TaskFilter, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations must make concurrent calls safe internally. The contract
/// does not promise per-task ordering: interleaved writes to one task resolve
/// as last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new open task built from `params`, assigning its identifier
    /// and setting `created_at` and `updated_at` to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend fails.
    async fn create(&self, params: TaskCreationParams) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task matching `filter`, newest `created_at` first.
    async fn find_all(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Merges `patch` into the stored task and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task>;

    /// Removes the task if present. Removing an unknown task succeeds.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
