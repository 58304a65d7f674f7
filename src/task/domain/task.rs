//! Task entity and related lifecycle types.

use super::{ParseTaskStatusError, Priority, TaskId, TaskNotes, TaskPatch, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task completion status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been completed.
    #[default]
    Open,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "open" => Ok(Self::Open),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields supplied by a caller before identity, status and timestamps are
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreationParams {
    title: TaskTitle,
    notes: Option<TaskNotes>,
    enhanced_description: Option<String>,
    is_ai_generated: bool,
    priority: Option<Priority>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskCreationParams {
    /// Creates parameters with the required title.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            notes: None,
            enhanced_description: None,
            is_ai_generated: false,
            priority: None,
            due_date: None,
        }
    }

    /// Sets task notes.
    #[must_use]
    pub fn with_notes(mut self, notes: TaskNotes) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Sets task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Attaches generated enhancement text and marks it as AI output.
    #[must_use]
    pub fn with_ai_enhancement(mut self, enhanced_description: impl Into<String>) -> Self {
        self.enhanced_description = Some(enhanced_description.into());
        self.is_ai_generated = true;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the notes, if any.
    #[must_use]
    pub const fn notes(&self) -> Option<&TaskNotes> {
        self.notes.as_ref()
    }

    /// Returns the enhancement text, if any.
    #[must_use]
    pub fn enhanced_description(&self) -> Option<&str> {
        self.enhanced_description.as_deref()
    }

    /// Returns whether the enhancement text is AI output.
    #[must_use]
    pub const fn is_ai_generated(&self) -> bool {
        self.is_ai_generated
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<TaskNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enhanced_description: Option<String>,
    #[serde(default)]
    is_ai_generated: bool,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted notes.
    pub notes: Option<TaskNotes>,
    /// Persisted enhancement text.
    pub enhanced_description: Option<String>,
    /// Persisted AI provenance flag.
    pub is_ai_generated: bool,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Option<Priority>,
    /// Persisted due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task with a fresh identifier.
    #[must_use]
    pub fn create(params: TaskCreationParams, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let TaskCreationParams {
            title,
            notes,
            enhanced_description,
            is_ai_generated,
            priority,
            due_date,
        } = params;

        Self {
            id: TaskId::new(),
            title,
            notes,
            // The provenance flag only holds while there is text to vouch for.
            is_ai_generated: is_ai_generated && enhanced_description.is_some(),
            enhanced_description,
            status: TaskStatus::Open,
            priority,
            due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            notes: data.notes,
            enhanced_description: data.enhanced_description,
            is_ai_generated: data.is_ai_generated,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at.max(data.created_at),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the notes, if any.
    #[must_use]
    pub const fn notes(&self) -> Option<&TaskNotes> {
        self.notes.as_ref()
    }

    /// Returns the enhancement text, if any.
    #[must_use]
    pub fn enhanced_description(&self) -> Option<&str> {
        self.enhanced_description.as_deref()
    }

    /// Returns whether the enhancement text is unmodified AI output.
    #[must_use]
    pub const fn is_ai_generated(&self) -> bool {
        self.is_ai_generated
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the supplied fields into this task and refreshes `updated_at`.
    ///
    /// Any field present in the patch overwrites the stored value, including
    /// status and the AI provenance flag.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        let TaskPatch {
            title,
            notes,
            enhanced_description,
            is_ai_generated,
            status,
            priority,
            due_date,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = notes {
            self.notes = value;
        }
        if let Some(value) = enhanced_description {
            self.enhanced_description = value;
        }
        if let Some(value) = is_ai_generated {
            self.is_ai_generated = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        self.touch(clock);
    }

    /// Updates `updated_at`, never moving it before `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}
