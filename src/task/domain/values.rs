//! Validated scalar values carried by a task.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty task title of at most [`TaskTitle::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input or
    /// [`TaskDomainError::TitleTooLong`] past the character limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                actual,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task notes of at most [`TaskNotes::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskNotes(String);

impl TaskNotes {
    /// Maximum notes length in characters.
    pub const MAX_CHARS: usize = 2000;

    /// Creates validated notes. Empty notes are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotesTooLong`] past the character limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(TaskDomainError::NotesTooLong {
                actual,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the notes as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskNotes {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskNotes> for String {
    fn from(value: TaskNotes) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskNotes {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Task priority where 1 is the highest and 3 the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    /// Highest priority.
    pub const HIGH: Self = Self(1);
    /// Default middle priority.
    pub const MEDIUM: Self = Self(2);
    /// Lowest priority.
    pub const LOW: Self = Self(3);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] outside `1..=3`.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        match value {
            1 => Ok(Self::HIGH),
            2 => Ok(Self::MEDIUM),
            3 => Ok(Self::LOW),
            _ => Err(TaskDomainError::InvalidPriority(value)),
        }
    }

    /// Returns the numeric priority.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(value: Priority) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
