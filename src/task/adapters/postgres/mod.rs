//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool, escape_like_pattern};
