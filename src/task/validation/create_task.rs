//! Input contract for creating a task.

use super::{
    ValidationErrors,
    schema::{Field, ObjectReader},
};
use crate::task::domain::{Priority, TaskCreationParams, TaskDomainError, TaskNotes, TaskTitle};
use serde_json::Value;

pub(crate) const TITLE_REQUIRED: &str = "Title is required";
pub(crate) const TITLE_TOO_LONG: &str = "Title must be less than 200 characters";
pub(crate) const NOTES_TOO_LONG: &str = "Notes must be less than 2000 characters";
pub(crate) const PRIORITY_NOT_INTEGER: &str = "Priority must be an integer";
pub(crate) const PRIORITY_OUT_OF_RANGE: &str = "Priority must be between 1 and 3";

/// Validated request to create a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskCommand {
    /// Fields for the new task.
    pub params: TaskCreationParams,
    /// Whether to request an AI enhancement during creation.
    pub auto_enhance: bool,
}

/// Validates a create-task JSON body.
///
/// Accepted shape: `title` (required, 1–200 characters), `notes` (≤2000
/// characters), `priority` (integer 1–3), `dueDate` (ISO-8601 timestamp) and
/// `autoEnhance` (boolean). Optional fields may be omitted or `null`.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with one entry per violated rule.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use taskwise::task::validation::parse_create_task;
///
/// let command = parse_create_task(&json!({"title": "Write report", "priority": 1}))
///     .expect("valid body");
/// assert_eq!(command.params.title().as_str(), "Write report");
/// assert!(!command.auto_enhance);
///
/// let errors = parse_create_task(&json!({"title": "", "priority": 5})).unwrap_err();
/// assert!(errors.has_issue_for("title"));
/// assert!(errors.has_issue_for("priority"));
/// ```
pub fn parse_create_task(body: &Value) -> Result<CreateTaskCommand, ValidationErrors> {
    let mut reader = ObjectReader::new(body);
    if !reader.is_object() {
        return Err(ValidationErrors::from_issues(reader.into_issues()));
    }

    let title = reader
        .required_str("title")
        .and_then(|raw| read_title(&mut reader, raw));
    let notes = match reader.field("notes") {
        Field::Present(value) => reader
            .as_str("notes", value)
            .and_then(|raw| read_notes(&mut reader, raw)),
        Field::Absent | Field::Null => None,
    };
    let priority = match reader.field("priority") {
        Field::Present(value) => read_priority(&mut reader, value),
        Field::Absent | Field::Null => None,
    };
    let due_date = match reader.field("dueDate") {
        Field::Present(value) => reader.as_timestamp("dueDate", value),
        Field::Absent | Field::Null => None,
    };
    let auto_enhance = match reader.field("autoEnhance") {
        Field::Present(value) => reader.as_bool("autoEnhance", value).unwrap_or(false),
        Field::Absent | Field::Null => false,
    };

    let issues = reader.into_issues();
    let Some(valid_title) = title.filter(|_| issues.is_empty()) else {
        return Err(ValidationErrors::from_issues(issues));
    };

    let mut params = TaskCreationParams::new(valid_title);
    if let Some(value) = notes {
        params = params.with_notes(value);
    }
    if let Some(value) = priority {
        params = params.with_priority(value);
    }
    if let Some(value) = due_date {
        params = params.with_due_date(value);
    }

    Ok(CreateTaskCommand {
        params,
        auto_enhance,
    })
}

pub(crate) fn read_title(reader: &mut ObjectReader<'_>, raw: &str) -> Option<TaskTitle> {
    TaskTitle::new(raw)
        .map_err(|error| reader.issue("title", domain_message(&error)))
        .ok()
}

pub(crate) fn read_notes(reader: &mut ObjectReader<'_>, raw: &str) -> Option<TaskNotes> {
    TaskNotes::new(raw)
        .map_err(|error| reader.issue("notes", domain_message(&error)))
        .ok()
}

pub(crate) fn read_priority(reader: &mut ObjectReader<'_>, value: &Value) -> Option<Priority> {
    let raw = reader.as_integer("priority", value, PRIORITY_NOT_INTEGER)?;
    Priority::new(raw)
        .map_err(|error| reader.issue("priority", domain_message(&error)))
        .ok()
}

/// Maps domain value errors onto the user-facing rule messages.
pub(crate) const fn domain_message(error: &TaskDomainError) -> &'static str {
    match error {
        TaskDomainError::EmptyTitle => TITLE_REQUIRED,
        TaskDomainError::TitleTooLong { .. } => TITLE_TOO_LONG,
        TaskDomainError::NotesTooLong { .. } => NOTES_TOO_LONG,
        TaskDomainError::InvalidPriority(_) => PRIORITY_OUT_OF_RANGE,
    }
}
