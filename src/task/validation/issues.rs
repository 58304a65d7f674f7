//! Structured validation failures.

use serde::Serialize;
use thiserror::Error;

/// A single violated rule, keyed by the offending field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path of the offending field (`steps.2`), empty for the
    /// document root.
    pub field: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl FieldIssue {
    /// Creates an issue for a field path.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying one entry per violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", format_issues(.details))]
pub struct ValidationErrors {
    message: String,
    details: Vec<FieldIssue>,
}

fn format_issues(details: &[FieldIssue]) -> String {
    if details.is_empty() {
        return String::new();
    }
    let joined = details
        .iter()
        .map(|issue| {
            if issue.field.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.field, issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!(" ({joined})")
}

impl ValidationErrors {
    /// Message used for structural schema failures.
    pub const INVALID_REQUEST: &'static str = "Invalid request data";

    /// Creates a schema failure from collected field issues.
    #[must_use]
    pub fn from_issues(details: Vec<FieldIssue>) -> Self {
        Self {
            message: Self::INVALID_REQUEST.to_owned(),
            details,
        }
    }

    /// Creates a failure for a precondition that is not tied to one field.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Returns the summary message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the per-field issues.
    #[must_use]
    pub fn details(&self) -> &[FieldIssue] {
        &self.details
    }

    /// Returns `true` when an issue was recorded for `field`.
    #[must_use]
    pub fn has_issue_for(&self, field: &str) -> bool {
        self.details.iter().any(|issue| issue.field == field)
    }
}
