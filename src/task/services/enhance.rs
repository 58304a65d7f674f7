//! On-demand enhancement of an existing task.

use super::{TaskEnhancer, TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::{StructuredGenerator, TaskRepository},
};
use std::sync::Arc;
use tracing::info;

/// Generates and stores an AI enhancement for a stored task.
pub struct EnhanceTaskUseCase<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    repository: Arc<R>,
    enhancer: TaskEnhancer<G>,
}

impl<R, G> EnhanceTaskUseCase<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    /// Creates the use-case.
    #[must_use]
    pub const fn new(repository: Arc<R>, enhancer: TaskEnhancer<G>) -> Self {
        Self {
            repository,
            enhancer,
        }
    }

    /// Enhances the task with `id`, replacing any previous enhancement.
    ///
    /// Nothing is written unless generation succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// and [`TaskServiceError::ServiceUnavailable`] when generation fails.
    pub async fn execute(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        let description = self.enhancer.enhance(task.title(), task.notes()).await?;
        let updated = self
            .repository
            .update(id, TaskPatch::new().with_ai_enhancement(description))
            .await?;
        info!(task_id = %id, "task enhanced");
        Ok(updated)
    }
}
