//! Query-string contract for listing tasks.

use super::{FieldIssue, ValidationErrors, create_task::PRIORITY_OUT_OF_RANGE};
use crate::task::domain::{Priority, TaskFilter, TaskStatus};
use serde::Deserialize;

/// Raw listing parameters as they arrive on the query string.
///
/// Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// Status to match exactly.
    pub status: Option<String>,
    /// Priority to match exactly.
    pub priority: Option<String>,
    /// Case-insensitive text to find in the title or notes.
    pub search: Option<String>,
}

impl ListTasksQuery {
    /// Validates the parameters into a [`TaskFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when `status` is not `open`/`done` or
    /// `priority` is not an integer between 1 and 3.
    pub fn into_filter(self) -> Result<TaskFilter, ValidationErrors> {
        let mut filter = TaskFilter::new();
        let mut issues = Vec::new();

        if let Some(raw) = non_empty(self.status) {
            match TaskStatus::try_from(raw.as_str()) {
                Ok(status) => filter = filter.with_status(status),
                Err(_) => issues.push(FieldIssue::new(
                    "status",
                    format!("Invalid enum value. Expected 'open' | 'done', received '{raw}'"),
                )),
            }
        }

        if let Some(raw) = non_empty(self.priority) {
            match raw.trim().parse::<i64>().ok().map(Priority::new) {
                Some(Ok(priority)) => filter = filter.with_priority(priority),
                Some(Err(_)) => issues.push(FieldIssue::new("priority", PRIORITY_OUT_OF_RANGE)),
                None => issues.push(FieldIssue::new(
                    "priority",
                    format!("Expected integer, received '{raw}'"),
                )),
            }
        }

        if let Some(search) = non_empty(self.search) {
            filter = filter.with_search(search);
        }

        if issues.is_empty() {
            Ok(filter)
        } else {
            Err(ValidationErrors::from_issues(issues))
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
