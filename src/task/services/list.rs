//! Filtered task listing and single-task lookup.

use super::{TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{Task, TaskFilter, TaskId},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Read-side queries over stored tasks.
pub struct ListTasksUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> ListTasksUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use-case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns tasks matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn execute(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all(filter).await?)
    }

    /// Returns one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id`.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
