//! Input contract for partially updating a task.

use super::{
    ValidationErrors,
    create_task::{read_notes, read_priority, read_title},
    schema::{Field, ObjectReader, expected},
};
use crate::task::domain::{TaskPatch, TaskStatus};
use serde_json::Value;

/// Validates a partial-update JSON body into a [`TaskPatch`].
///
/// Each supplied field follows the creation rules; `status` must be `open`
/// or `done`. `null` clears `notes`, `enhancedDescription`, `priority` and
/// `dueDate`. Unknown keys and the immutable `id`, `createdAt` and
/// `updatedAt` keys are ignored.
///
/// Setting `enhancedDescription` without an explicit `isAiGenerated` marks
/// the text as a human edit, so the patch carries `isAiGenerated = false`.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with one entry per violated rule.
pub fn parse_update_task(body: &Value) -> Result<TaskPatch, ValidationErrors> {
    let mut reader = ObjectReader::new(body);
    if !reader.is_object() {
        return Err(ValidationErrors::from_issues(reader.into_issues()));
    }

    let mut patch = TaskPatch::new();

    match reader.field("title") {
        Field::Present(value) => {
            patch.title = reader
                .as_str("title", value)
                .and_then(|raw| read_title(&mut reader, raw));
        }
        Field::Null => reader.issue("title", "Expected string, received null"),
        Field::Absent => {}
    }

    match reader.field("notes") {
        Field::Present(value) => {
            patch.notes = reader
                .as_str("notes", value)
                .and_then(|raw| read_notes(&mut reader, raw))
                .map(Some);
        }
        Field::Null => patch.notes = Some(None),
        Field::Absent => {}
    }

    match reader.field("enhancedDescription") {
        Field::Present(value) => {
            patch.enhanced_description = reader
                .as_str("enhancedDescription", value)
                .map(|text| Some(text.to_owned()));
        }
        Field::Null => patch.enhanced_description = Some(None),
        Field::Absent => {}
    }

    match reader.field("isAiGenerated") {
        Field::Present(value) => patch.is_ai_generated = reader.as_bool("isAiGenerated", value),
        Field::Null => reader.issue("isAiGenerated", "Expected boolean, received null"),
        Field::Absent => {}
    }

    match reader.field("status") {
        Field::Present(value) => patch.status = read_status(&mut reader, value),
        Field::Null => reader.issue("status", expected("string", &Value::Null)),
        Field::Absent => {}
    }

    match reader.field("priority") {
        Field::Present(value) => patch.priority = read_priority(&mut reader, value).map(Some),
        Field::Null => patch.priority = Some(None),
        Field::Absent => {}
    }

    match reader.field("dueDate") {
        Field::Present(value) => patch.due_date = reader.as_timestamp("dueDate", value).map(Some),
        Field::Null => patch.due_date = Some(None),
        Field::Absent => {}
    }

    let issues = reader.into_issues();
    if !issues.is_empty() {
        return Err(ValidationErrors::from_issues(issues));
    }

    if patch.enhanced_description.is_some() && patch.is_ai_generated.is_none() {
        patch.is_ai_generated = Some(false);
    }
    Ok(patch)
}

fn read_status<'a>(reader: &mut ObjectReader<'a>, value: &'a Value) -> Option<TaskStatus> {
    let raw = reader.as_str("status", value)?;
    TaskStatus::try_from(raw)
        .map_err(|_| {
            reader.issue(
                "status",
                format!("Invalid enum value. Expected 'open' | 'done', received '{raw}'"),
            );
        })
        .ok()
}
