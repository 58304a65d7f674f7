//! Task removal.

use super::TaskServiceResult;
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;

/// Removes tasks. Removing an unknown task succeeds.
pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use-case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deletes the task with `id` if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when persistence fails.
    pub async fn execute(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
