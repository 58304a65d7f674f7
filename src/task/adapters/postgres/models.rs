//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Serialized enhancement payload.
    pub enhanced_description: Option<String>,
    /// AI provenance flag.
    pub is_ai_generated: bool,
    /// Completion status.
    pub status: String,
    /// Priority value.
    pub priority: Option<i16>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Serialized enhancement payload.
    pub enhanced_description: Option<String>,
    /// AI provenance flag.
    pub is_ai_generated: bool,
    /// Completion status.
    pub status: String,
    /// Priority value.
    pub priority: Option<i16>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Full-row changeset written after a patch is merged.
///
/// `None` clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Serialized enhancement payload.
    pub enhanced_description: Option<String>,
    /// AI provenance flag.
    pub is_ai_generated: bool,
    /// Completion status.
    pub status: String,
    /// Priority value.
    pub priority: Option<i16>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
