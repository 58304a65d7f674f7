//! Deterministic generator used when no provider is configured.

use crate::task::ports::{GenerationResult, StructuredGenerator};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

/// Generator that answers every prompt with the same enhancement.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGenerator {
    latency: Duration,
}

impl StubGenerator {
    /// Creates a stub that answers immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Delays every answer by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Returns the canned answer.
    #[must_use]
    pub fn canned_output() -> Value {
        json!({
            "summary": "Offline plan generated without an AI provider.",
            "steps": [
                "Clarify the expected outcome",
                "Break the work into small pieces",
                "Review the result"
            ],
            "risks": ["Estimate is a placeholder"],
            "estimateHours": 1
        })
    }
}

#[async_trait]
impl StructuredGenerator for StubGenerator {
    async fn generate_value(&self, _prompt: &str) -> GenerationResult<Value> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::canned_output())
    }
}
