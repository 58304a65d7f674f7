//! Request and response contracts for the task workflows.
//!
//! Contracts read untyped JSON so that every violated rule can be reported
//! with its field path, rather than stopping at the first type error the way
//! derived deserialization would.

mod create_task;
mod enhancement;
mod issues;
mod list_query;
mod schema;
mod update_task;

pub use create_task::{CreateTaskCommand, parse_create_task};
pub use issues::{FieldIssue, ValidationErrors};
pub use list_query::ListTasksQuery;
pub use update_task::parse_update_task;
