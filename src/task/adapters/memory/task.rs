//! In-memory repository for task storage.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskCreationParams, TaskFilter, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Each call holds the lock for its whole duration and nothing more:
/// concurrent writes to one task resolve as last write wins, with no
/// per-task ordering or conflict detection.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping tasks with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, params: TaskCreationParams) -> TaskRepositoryResult<Task> {
        let task = Task::create(params, &*self.clock);
        let mut state = self.write()?;
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by_key(|task| std::cmp::Reverse(task.created_at()));
        Ok(tasks)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply_patch(patch, &*self.clock);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.remove(&id);
        Ok(())
    }
}
