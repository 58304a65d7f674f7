//! Partial task updates.

use super::{Priority, TaskNotes, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Partial set of task fields to merge into a stored task.
///
/// `None` leaves a field untouched. For optional task fields the inner
/// option distinguishes setting a value (`Some(Some(_))`) from clearing it
/// (`Some(None)`). Identity and timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement or cleared notes.
    pub notes: Option<Option<TaskNotes>>,
    /// Replacement or cleared enhancement text.
    pub enhanced_description: Option<Option<String>>,
    /// Replacement AI provenance flag.
    pub is_ai_generated: Option<bool>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement or cleared priority.
    pub priority: Option<Option<Priority>>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets or clears the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<TaskNotes>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets or clears the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Stores generated enhancement text and marks it as AI output.
    #[must_use]
    pub fn with_ai_enhancement(mut self, enhanced_description: impl Into<String>) -> Self {
        self.enhanced_description = Some(Some(enhanced_description.into()));
        self.is_ai_generated = Some(true);
        self
    }

    /// Stores human-edited enhancement text, revoking AI provenance.
    #[must_use]
    pub fn with_edited_description(mut self, enhanced_description: Option<String>) -> Self {
        self.enhanced_description = Some(enhanced_description);
        self.is_ai_generated = Some(false);
        self
    }

    /// Overrides the AI provenance flag verbatim.
    #[must_use]
    pub const fn with_ai_generated(mut self, is_ai_generated: bool) -> Self {
        self.is_ai_generated = Some(is_ai_generated);
        self
    }
}
