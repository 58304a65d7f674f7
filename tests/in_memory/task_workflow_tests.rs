//! End-to-end task flows through the composition root.

use super::helpers::{Harness, harness, params};
use rstest::rstest;
use taskwise::task::{
    domain::{Priority, TaskFilter, TaskPatch, TaskStatus, TaskTitle},
    ports::TaskRepository,
    services::ErrorKind,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_starts_open_with_matching_timestamps(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let task = harness
        .use_cases
        .create
        .execute(params("Write report")?.with_priority(Priority::HIGH), false)
        .await?;

    eyre::ensure!(task.status() == TaskStatus::Open, "new tasks are open");
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "timestamps match at creation"
    );
    let stored = harness.repository.find_by_id(task.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&task), "task is persisted as returned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_and_orders_newest_first(harness: Harness) -> Result<(), eyre::Report> {
    let create = &harness.use_cases.create;
    let first = create.execute(params("Write report")?, false).await?;
    create.execute(params("Buy milk")?, false).await?;
    let third = create.execute(params("Report taxes")?, false).await?;

    let all = harness.use_cases.list.execute(&TaskFilter::new()).await?;
    let titles: Vec<&str> = all.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(
        titles == ["Report taxes", "Buy milk", "Write report"],
        "unexpected order: {titles:?}"
    );

    harness
        .use_cases
        .update
        .execute(third.id(), TaskPatch::new().with_status(TaskStatus::Done))
        .await?;
    let open_reports = harness
        .use_cases
        .list
        .execute(
            &TaskFilter::new()
                .with_status(TaskStatus::Open)
                .with_search("REPORT"),
        )
        .await?;
    eyre::ensure!(
        open_reports.len() == 1 && open_reports.first().map(|task| task.id()) == Some(first.id()),
        "only the open report matches"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_supplied_fields(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .use_cases
        .create
        .execute(params("Draft")?.with_priority(Priority::LOW), false)
        .await?;

    let updated = harness
        .use_cases
        .update
        .execute(
            created.id(),
            TaskPatch::new().with_title(TaskTitle::new("Final")?),
        )
        .await?;

    eyre::ensure!(updated.title().as_str() == "Final", "title replaced");
    eyre::ensure!(updated.priority() == Some(Priority::LOW), "priority kept");
    eyre::ensure!(updated.updated_at() > created.updated_at(), "updatedAt moves");
    eyre::ensure!(updated.created_at() == created.created_at(), "createdAt fixed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_cannot_be_fetched(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .use_cases
        .create
        .execute(params("Temporary")?, false)
        .await?;

    harness.use_cases.delete.execute(created.id()).await?;
    harness.use_cases.delete.execute(created.id()).await?;

    let Err(err) = harness.use_cases.list.get(created.id()).await else {
        eyre::bail!("deleted task is still present");
    };
    eyre::ensure!(err.kind() == ErrorKind::NotFound, "expected not found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_patch_is_rejected(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .use_cases
        .create
        .execute(params("Untouched")?, false)
        .await?;

    let Err(err) = harness
        .use_cases
        .update
        .execute(created.id(), TaskPatch::new())
        .await
    else {
        eyre::bail!("empty patch was accepted");
    };
    eyre::ensure!(err.kind() == ErrorKind::Validation, "expected validation");
    Ok(())
}
