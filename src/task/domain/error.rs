//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the character limit.
    #[error("task title has {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Character count of the rejected title.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The task notes exceed the character limit.
    #[error("task notes have {actual} characters, limit is {max}")]
    NotesTooLong {
        /// Character count of the rejected notes.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The priority is outside `1..=3`.
    #[error("invalid priority {0}, expected an integer between 1 and 3")]
    InvalidPriority(i64),
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
