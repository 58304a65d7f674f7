//! Task listing filter.

use super::{Priority, Task, TaskStatus};

/// Criteria for listing tasks. Every supplied criterion must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to an exact status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to an exact priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to tasks whose title or notes contain `search`,
    /// ignoring case. Blank input leaves the filter unrestricted.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let needle = search.into();
        self.search = if needle.is_empty() {
            None
        } else {
            Some(needle)
        };
        self
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the search criterion.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns `true` when the task satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status() != status) {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| task.priority() != Some(priority))
        {
            return false;
        }
        self.search
            .as_deref()
            .is_none_or(|needle| search_matches(task, needle))
    }
}

fn search_matches(task: &Task, needle: &str) -> bool {
    let lowered = needle.to_lowercase();
    task.title().as_str().to_lowercase().contains(&lowered)
        || task
            .notes()
            .is_some_and(|notes| notes.as_str().to_lowercase().contains(&lowered))
}
