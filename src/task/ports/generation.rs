//! Generation port turning a prompt into validated structured data.

use crate::task::validation::FieldIssue;
use async_trait::async_trait;
use serde_json::Value;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// External text-generation capability that answers with JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// Sends `prompt` to the generator and parses its raw output as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] for transport failures and for output
    /// that is not JSON.
    async fn generate_value(&self, prompt: &str) -> GenerationResult<Value>;
}

/// Shape contract for values produced by a [`StructuredGenerator`].
pub trait ExpectedShape: Sized {
    /// Checks `value` against the shape and converts it.
    ///
    /// # Errors
    ///
    /// Returns every field-level violation found.
    fn from_json(value: &Value) -> Result<Self, Vec<FieldIssue>>;
}

/// Generates a value and validates it against `T`'s shape.
///
/// # Errors
///
/// Returns [`GenerationError`] when the port fails or the output does not
/// match the shape.
pub async fn generate<T, G>(generator: &G, prompt: &str) -> GenerationResult<T>
where
    T: ExpectedShape,
    G: StructuredGenerator + ?Sized,
{
    let value = generator.generate_value(prompt).await?;
    T::from_json(&value).map_err(|issues| GenerationError::schema_mismatch(&issues))
}

/// Failure of the generation capability.
///
/// Transport errors, malformed output, schema mismatches and timeouts all
/// share this one kind; the message exists for diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("generation failed: {message}")]
pub struct GenerationError {
    message: String,
    #[source]
    source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl GenerationError {
    /// Creates a failure with a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a transport or runtime error.
    pub fn transport(err: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Arc::new(err)),
        }
    }

    /// Reports output that could not be parsed as JSON.
    #[must_use]
    pub fn malformed_output(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("output is not valid JSON: {detail}"))
    }

    /// Reports output whose shape did not match the expected contract.
    #[must_use]
    pub fn schema_mismatch(issues: &[FieldIssue]) -> Self {
        let detail = issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(format!("output did not match the expected shape ({detail})"))
    }

    /// Reports a call that exceeded its time bound.
    #[must_use]
    pub fn timed_out(limit: Duration) -> Self {
        Self::new(format!("no response within {}ms", limit.as_millis()))
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
