//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::TemporaryDatabase;
use crate::test_helpers::SteppingClock;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use std::sync::Arc;
use taskwise::task::{
    adapters::postgres::{PostgresTaskRepository, TaskPgPool},
    domain::{TaskCreationParams, TaskTitle},
};
use uuid::Uuid;

/// SQL creating the task schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2025-01-01-000000_create_tasks/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskwise_test_template";

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub async fn ensure_template(cluster: PostgresCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, apply_migrations)
        .await
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Repository over a per-test database, stamped by a stepping clock.
///
/// Fields drop in order, so the pool closes before the database is removed.
pub struct PreparedRepo {
    /// Repository under test.
    pub repo: PostgresTaskRepository<SteppingClock>,
    /// Pool shared with `repo`, for building repositories with other clocks.
    pub pool: TaskPgPool,
    /// Temporary database created from the template.
    pub temp_db: TemporaryDatabase,
}

/// Creates a database from the template and a repository over it.
///
/// # Errors
///
/// Returns an error if database creation or pool setup fails.
pub async fn setup_repository(cluster: PostgresCluster) -> Result<PreparedRepo, BoxError> {
    let temp_db = cluster
        .temporary_database_from_template(&format!("test_{}", Uuid::new_v4()), TEMPLATE_DB)
        .await?;

    let manager = ConnectionManager::<PgConnection>::new(temp_db.url());
    let pool: TaskPgPool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|err| Box::new(err) as BoxError)?;

    let repo = PostgresTaskRepository::with_clock(pool.clone(), Arc::new(SteppingClock::new()));
    Ok(PreparedRepo {
        repo,
        pool,
        temp_db,
    })
}

/// Prepares a repository, or yields `None` when no server is configured.
///
/// # Errors
///
/// Returns an error if template creation or repository setup fails.
#[fixture]
pub async fn prepared_repo(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<PreparedRepo>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    ensure_template(cluster).await?;
    setup_repository(cluster).await.map(Some)
}

/// Builds creation parameters for `title`.
///
/// # Errors
///
/// Returns an error if the title is invalid.
pub fn params(title: &str) -> Result<TaskCreationParams, BoxError> {
    Ok(TaskCreationParams::new(TaskTitle::new(title)?))
}
