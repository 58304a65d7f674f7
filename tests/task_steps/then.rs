//! Then steps for task behaviour scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the task is marked as AI generated")]
fn task_is_ai_generated(world: &TaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_task()?.is_ai_generated(),
        "expected an AI-generated task"
    );
    Ok(())
}

#[then("the task is not marked as AI generated")]
fn task_is_not_ai_generated(world: &TaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.last_task()?.is_ai_generated(),
        "expected a task without AI provenance"
    );
    Ok(())
}

#[then("the task description has a summary")]
fn description_has_summary(world: &TaskWorld) -> Result<(), eyre::Report> {
    let description = world
        .last_task()?
        .enhanced_description()
        .ok_or_else(|| eyre::eyre!("task has no description"))?;
    let payload: Value = serde_json::from_str(description)?;
    eyre::ensure!(
        payload.get("summary").and_then(Value::as_str).is_some(),
        "description lacks a summary: {description}"
    );
    Ok(())
}

#[then("the task has no description")]
fn task_has_no_description(world: &TaskWorld) -> Result<(), eyre::Report> {
    let description = world.last_task()?.enhanced_description();
    eyre::ensure!(description.is_none(), "unexpected description {description:?}");
    Ok(())
}

#[then(r#"the task description is "{text}""#)]
fn description_is(world: &TaskWorld, text: String) -> Result<(), eyre::Report> {
    let description = world.last_task()?.enhanced_description();
    eyre::ensure!(
        description == Some(text.as_str()),
        "expected description {text:?}, found {description:?}"
    );
    Ok(())
}

#[then(r#"the request fails as "{kind}""#)]
fn request_fails_as(world: &TaskWorld, kind: String) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a failure, none recorded"))?;
    eyre::ensure!(
        err.kind().name() == kind,
        "expected {kind}, got {} ({err})",
        err.kind().name()
    );
    Ok(())
}

#[then("the stored task is unchanged")]
fn stored_task_unchanged(world: &TaskWorld) -> Result<(), eyre::Report> {
    let stored = world.stored_task()?;
    let current = run_async(world.use_cases.list.get(stored.id()))?;
    eyre::ensure!(current == *stored, "stored task was modified");
    Ok(())
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles_are(world: &TaskWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world
        .listed
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}

#[then("no tasks are listed")]
fn no_tasks_listed(world: &TaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.listed.is_empty(),
        "expected no tasks, got {}",
        world.listed.len()
    );
    Ok(())
}
