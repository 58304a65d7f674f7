//! Composition root wiring task use-cases to their ports.

use crate::task::{
    ports::{StructuredGenerator, TaskRepository},
    services::{
        CreateTaskUseCase, DeleteTaskUseCase, EnhanceTaskUseCase, ListTasksUseCase, TaskEnhancer,
        UpdateTaskUseCase,
    },
};
use std::sync::Arc;
use std::time::Duration;

/// Tunables applied while wiring use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseOptions {
    /// Bound on a single generation call.
    pub generation_timeout: Duration,
}

impl Default for UseCaseOptions {
    fn default() -> Self {
        Self {
            generation_timeout: Duration::from_secs(30),
        }
    }
}

/// Every task use-case, sharing one repository and one generator.
pub struct TaskUseCases<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    /// Task creation.
    pub create: CreateTaskUseCase<R, G>,
    /// Listing and lookup.
    pub list: ListTasksUseCase<R>,
    /// Partial updates.
    pub update: UpdateTaskUseCase<R>,
    /// Removal.
    pub delete: DeleteTaskUseCase<R>,
    /// On-demand enhancement.
    pub enhance: EnhanceTaskUseCase<R, G>,
}

/// Use-cases over type-erased ports, as held by the HTTP layer.
pub type DynTaskUseCases = TaskUseCases<dyn TaskRepository, dyn StructuredGenerator>;

/// Builds the full use-case set over `repository` and `generator`.
///
/// Each call produces an independent set; nothing is cached globally.
#[must_use]
pub fn build_use_cases<R, G>(
    repository: Arc<R>,
    generator: Arc<G>,
    options: UseCaseOptions,
) -> TaskUseCases<R, G>
where
    R: TaskRepository + ?Sized,
    G: StructuredGenerator + ?Sized,
{
    let timeout = options.generation_timeout;
    let create_enhancer = TaskEnhancer::new(Arc::clone(&generator)).with_timeout(timeout);
    let enhance_enhancer = TaskEnhancer::new(generator).with_timeout(timeout);
    TaskUseCases {
        create: CreateTaskUseCase::new(Arc::clone(&repository), Some(create_enhancer)),
        list: ListTasksUseCase::new(Arc::clone(&repository)),
        update: UpdateTaskUseCase::new(Arc::clone(&repository)),
        delete: DeleteTaskUseCase::new(Arc::clone(&repository)),
        enhance: EnhanceTaskUseCase::new(repository, enhance_enhancer),
    }
}
