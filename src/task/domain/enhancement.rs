//! Structured AI enhancement attached to a task.

use serde::{Deserialize, Serialize};

/// AI-generated breakdown of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementPayload {
    /// One-paragraph summary.
    pub summary: String,
    /// Ordered implementation steps.
    pub steps: Vec<String>,
    /// Risks worth tracking.
    pub risks: Vec<String>,
    /// Effort estimate in hours.
    pub estimate_hours: f64,
}

impl EnhancementPayload {
    /// Serializes the payload into the text stored as a task's enhanced
    /// description.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_description(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
