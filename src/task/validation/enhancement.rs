//! Output contract for AI-generated task enhancements.

use super::{FieldIssue, schema::ObjectReader};
use crate::task::{domain::EnhancementPayload, ports::ExpectedShape};
use serde_json::Value;

impl ExpectedShape for EnhancementPayload {
    /// Requires `summary: string`, `steps: string[]`, `risks: string[]` and
    /// `estimateHours: number`. Extra keys are dropped.
    fn from_json(value: &Value) -> Result<Self, Vec<FieldIssue>> {
        let mut reader = ObjectReader::new(value);
        if !reader.is_object() {
            return Err(reader.into_issues());
        }

        let summary = reader.required_str("summary").map(str::to_owned);
        let steps = reader.required_string_list("steps");
        let risks = reader.required_string_list("risks");
        let estimate_hours = reader.required_number("estimateHours");
        let issues = reader.into_issues();

        match (summary, steps, risks, estimate_hours) {
            (Some(summary_text), Some(step_list), Some(risk_list), Some(hours))
                if issues.is_empty() =>
            {
                Ok(Self {
                    summary: summary_text,
                    steps: step_list,
                    risks: risk_list,
                    estimate_hours: hours,
                })
            }
            _ => Err(issues),
        }
    }
}
