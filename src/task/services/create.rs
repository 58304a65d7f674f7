//! Task creation with optional automatic enhancement.

use super::{TaskEnhancer, TaskServiceResult};
use crate::task::{
    domain::{Task, TaskCreationParams},
    ports::{StructuredGenerator, TaskRepository},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Creates tasks, enhancing them first when the caller asks for it.
pub struct CreateTaskUseCase<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    repository: Arc<R>,
    enhancer: Option<TaskEnhancer<G>>,
}

impl<R, G> CreateTaskUseCase<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    /// Creates the use-case. Without an enhancer, `auto_enhance` requests
    /// are ignored.
    #[must_use]
    pub const fn new(repository: Arc<R>, enhancer: Option<TaskEnhancer<G>>) -> Self {
        Self {
            repository,
            enhancer,
        }
    }

    /// Persists a new task.
    ///
    /// When `auto_enhance` is set, an enhancement is generated first. A
    /// failed enhancement is logged and the task is stored without one.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when persistence fails.
    pub async fn execute(
        &self,
        params: TaskCreationParams,
        auto_enhance: bool,
    ) -> TaskServiceResult<Task> {
        let prepared = match (&self.enhancer, auto_enhance) {
            (Some(enhancer), true) => with_enhancement(enhancer, params).await,
            _ => params,
        };
        let task = self.repository.create(prepared).await?;
        info!(
            task_id = %task.id(),
            ai_generated = task.is_ai_generated(),
            "task created"
        );
        Ok(task)
    }
}

async fn with_enhancement<G>(
    enhancer: &TaskEnhancer<G>,
    params: TaskCreationParams,
) -> TaskCreationParams
where
    G: StructuredGenerator + ?Sized,
{
    match enhancer.enhance(params.title(), params.notes()).await {
        Ok(description) => params.with_ai_enhancement(description),
        Err(err) => {
            warn!(error = %err, "auto-enhancement failed, creating task without it");
            params
        }
    }
}
