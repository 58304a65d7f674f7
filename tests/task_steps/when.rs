//! When steps for task behaviour scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskwise::task::domain::{
    TaskCreationParams, TaskFilter, TaskId, TaskPatch, TaskStatus, TaskTitle,
};

#[when(r#"a task titled "{title}" is created with auto-enhancement"#)]
fn create_with_auto_enhancement(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let params = TaskCreationParams::new(TaskTitle::new(title)?);
    let result = run_async(world.use_cases.create.execute(params, true));
    world.record(result);
    Ok(())
}

#[when("the stored task is enhanced")]
fn enhance_stored_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.stored_task()?.id();
    let result = run_async(world.use_cases.enhance.execute(id));
    world.record(result);
    Ok(())
}

#[when("an unknown task is enhanced")]
fn enhance_unknown_task(world: &mut TaskWorld) {
    let result = run_async(world.use_cases.enhance.execute(TaskId::new()));
    world.record(result);
}

#[when(r#"the description is edited to "{text}""#)]
fn edit_description(world: &mut TaskWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.stored_task()?.id();
    let patch = TaskPatch::new().with_edited_description(Some(text));
    let result = run_async(world.use_cases.update.execute(id, patch));
    world.record(result);
    Ok(())
}

#[when("all tasks are listed")]
fn list_all(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world.listed = run_async(world.use_cases.list.execute(&TaskFilter::new()))?;
    Ok(())
}

#[when(r#"tasks are listed with search "{search}" and status "{status}""#)]
fn list_filtered(world: &mut TaskWorld, search: String, status: String) -> Result<(), eyre::Report> {
    let wanted = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let filter = TaskFilter::new().with_status(wanted).with_search(search);
    world.listed = run_async(world.use_cases.list.execute(&filter))?;
    Ok(())
}

#[when("the stored task is deleted twice")]
fn delete_twice(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.stored_task()?.id();
    run_async(world.use_cases.delete.execute(id))?;
    run_async(world.use_cases.delete.execute(id))?;
    world.listed = run_async(world.use_cases.list.execute(&TaskFilter::new()))?;
    Ok(())
}
