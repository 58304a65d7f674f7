//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, Priority, Task, TaskCreationParams, TaskFilter, TaskId, TaskNotes,
        TaskPatch, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
pub struct PostgresTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync + 'static,
{
    pool: TaskPgPool,
    clock: Arc<C>,
}

impl PostgresTaskRepository {
    /// Creates a repository from a connection pool using the system clock.
    #[must_use]
    pub fn new(pool: TaskPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<C> Clone for PostgresTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> PostgresTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a repository stamping tasks with `clock`.
    #[must_use]
    pub const fn with_clock(pool: TaskPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection, &C) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let clock = Arc::clone(&self.clock);
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection, &clock)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<diesel::result::Error> for TaskRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

/// Tasks are returned as read back from the database, so timestamps carry
/// the column's microsecond precision.
#[async_trait]
impl<C> TaskRepository for PostgresTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn create(&self, params: TaskCreationParams) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection, clock| {
            let task = Task::create(params, clock);
            let row = diesel::insert_into(tasks::table)
                .values(&to_new_row(&task))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection, _| {
            let row = load_row(connection, id)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let lookup = filter.clone();
        self.run_blocking(move |connection, _| {
            let mut query = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(status) = lookup.status() {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(priority) = lookup.priority() {
                query = query.filter(tasks::priority.eq(i16::from(priority.value())));
            }
            if let Some(search) = lookup.search() {
                let pattern = format!("%{}%", escape_like_pattern(search));
                query = query.filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::notes.ilike(pattern)),
                );
            }
            let rows = query
                .order(tasks::created_at.desc())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection, clock| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                let row = tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .select(TaskRow::as_select())
                    .for_update()
                    .first::<TaskRow>(tx)
                    .optional()?
                    .ok_or(TaskRepositoryError::NotFound(id))?;
                let mut task = row_to_task(row)?;
                task.apply_patch(patch, clock);
                let stored = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                    .set(&to_changeset(&task))
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                row_to_task(stored)
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection, _| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)?;
            Ok(())
        })
        .await
    }
}

/// Escapes `LIKE` wildcards so user input matches literally.
#[must_use]
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn load_row(connection: &mut PgConnection, id: TaskId) -> TaskRepositoryResult<Option<TaskRow>> {
    Ok(tasks::table
        .filter(tasks::id.eq(id.into_inner()))
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()?)
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        notes: task.notes().map(|notes| notes.as_str().to_owned()),
        enhanced_description: task.enhanced_description().map(str::to_owned),
        is_ai_generated: task.is_ai_generated(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().map(|priority| i16::from(priority.value())),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        notes: task.notes().map(|notes| notes.as_str().to_owned()),
        enhanced_description: task.enhanced_description().map(str::to_owned),
        is_ai_generated: task.is_ai_generated(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().map(|priority| i16::from(priority.value())),
        due_date: task.due_date(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        notes,
        enhanced_description,
        is_ai_generated,
        status,
        priority,
        due_date,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        notes: notes
            .map(TaskNotes::new)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        enhanced_description,
        is_ai_generated,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        priority: priority
            .map(|value| Priority::new(i64::from(value)))
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        due_date,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
