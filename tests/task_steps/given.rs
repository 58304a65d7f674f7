//! Given steps for task behaviour scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwise::task::domain::{TaskCreationParams, TaskPatch, TaskStatus, TaskTitle};

#[given("the AI generator is available")]
fn generator_available(world: &mut TaskWorld) {
    world.generator.set_offline(false);
}

#[given("the AI generator is unavailable")]
fn generator_unavailable(world: &mut TaskWorld) {
    world.generator.set_offline(true);
}

fn store_task(world: &mut TaskWorld, title: &str) -> Result<(), eyre::Report> {
    let params = TaskCreationParams::new(TaskTitle::new(title)?);
    let task = run_async(world.use_cases.create.execute(params, false))
        .wrap_err("store task for scenario")?;
    world.stored_task = Some(task);
    Ok(())
}

#[given(r#"a stored task titled "{title}""#)]
fn stored_task_titled(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    store_task(world, &title)
}

#[given(r#"a completed task titled "{title}""#)]
fn completed_task_titled(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    store_task(world, &title)?;
    let id = world.stored_task()?.id();
    let done = run_async(
        world
            .use_cases
            .update
            .execute(id, TaskPatch::new().with_status(TaskStatus::Done)),
    )
    .wrap_err("complete task for scenario")?;
    world.stored_task = Some(done);
    Ok(())
}

#[given("the stored task has been enhanced")]
fn stored_task_has_been_enhanced(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.stored_task()?.id();
    let enhanced = run_async(world.use_cases.enhance.execute(id))
        .wrap_err("enhance task for scenario")?;
    world.stored_task = Some(enhanced);
    Ok(())
}
