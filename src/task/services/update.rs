//! Partial task updates.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::TaskRepository,
    validation::ValidationErrors,
};
use std::sync::Arc;
use tracing::debug;

/// Message returned for a patch that changes nothing.
pub const EMPTY_PATCH: &str = "At least one field must be provided";

/// Applies a validated patch to a stored task.
pub struct UpdateTaskUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> UpdateTaskUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use-case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Merges `patch` into the task with `id` and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Validation`] for an empty patch and
    /// [`super::TaskServiceError::NotFound`] when the task does not exist.
    pub async fn execute(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        if patch.is_empty() {
            return Err(ValidationErrors::precondition(EMPTY_PATCH).into());
        }
        let task = self.repository.update(id, patch).await?;
        debug!(task_id = %id, "task updated");
        Ok(task)
    }
}
