//! Prompt sent to the generator when enhancing a task.

use crate::task::{
    domain::{TaskNotes, TaskTitle},
    ports::GenerationError,
};
use minijinja::{Environment, context};

const ENHANCEMENT_TEMPLATE: &str = r#"You are a seasoned project manager who breaks work into clear, actionable plans.
Audience: people tracking their own tasks in a task manager.
Produce a single JSON object describing how to get the task below done.

Task:
- Title: "{{ title }}"
- Notes: "{{ notes }}"

Reply with JSON only, matching exactly this shape:
{
  "summary": "string",
  "steps": ["string"],
  "risks": ["string"],
  "estimateHours": number
}
"#;

/// Placeholder used when a task has no notes.
const MISSING_NOTES: &str = "N/A";

/// Renders the enhancement prompt for a task's title and notes.
///
/// # Errors
///
/// Returns [`GenerationError`] if template rendering fails.
pub fn render_enhancement_prompt(
    title: &TaskTitle,
    notes: Option<&TaskNotes>,
) -> Result<String, GenerationError> {
    let notes_text = notes
        .map(TaskNotes::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(MISSING_NOTES);
    Environment::new()
        .render_str(
            ENHANCEMENT_TEMPLATE,
            context! { title => title.as_str(), notes => notes_text },
        )
        .map_err(GenerationError::transport)
}
