//! AI enhancement flows over the in-memory repository.

use super::helpers::{Harness, harness, params};
use rstest::rstest;
use serde_json::Value;
use taskwise::task::{domain::TaskPatch, ports::TaskRepository, services::ErrorKind};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn auto_enhanced_task_carries_structured_payload(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let task = harness
        .use_cases
        .create
        .execute(params("Plan the offsite")?, true)
        .await?;

    eyre::ensure!(task.is_ai_generated(), "task is AI generated");
    let description = task
        .enhanced_description()
        .ok_or_else(|| eyre::eyre!("missing description"))?;
    let payload: Value = serde_json::from_str(description)?;
    for key in ["summary", "steps", "risks", "estimateHours"] {
        eyre::ensure!(payload.get(key).is_some(), "payload lacks {key}");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_auto_enhancement_still_creates_task(harness: Harness) -> Result<(), eyre::Report> {
    harness.generator.go_down();

    let task = harness
        .use_cases
        .create
        .execute(params("Plan the offsite")?, true)
        .await?;

    eyre::ensure!(!task.is_ai_generated(), "task is not AI generated");
    eyre::ensure!(task.enhanced_description().is_none(), "no description");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_enhancement_leaves_task_unchanged(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .use_cases
        .create
        .execute(params("Refactor billing")?, false)
        .await?;
    harness.generator.go_down();

    let Err(err) = harness.use_cases.enhance.execute(created.id()).await else {
        eyre::bail!("enhancement unexpectedly succeeded");
    };
    eyre::ensure!(
        err.kind() == ErrorKind::ServiceUnavailable,
        "expected service unavailable, got {err}"
    );
    let stored = harness.repository.find_by_id(created.id()).await?;
    eyre::ensure!(stored == Some(created), "stored task changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_ai_description_clears_provenance(harness: Harness) -> Result<(), eyre::Report> {
    let created = harness
        .use_cases
        .create
        .execute(params("Refactor billing")?, false)
        .await?;

    let enhanced = harness.use_cases.enhance.execute(created.id()).await?;
    eyre::ensure!(enhanced.is_ai_generated(), "enhanced task is AI generated");

    let edited = harness
        .use_cases
        .update
        .execute(
            created.id(),
            TaskPatch::new().with_edited_description(Some("Do it by hand".to_owned())),
        )
        .await?;
    eyre::ensure!(!edited.is_ai_generated(), "edited text is not AI generated");
    eyre::ensure!(
        edited.enhanced_description() == Some("Do it by hand"),
        "edited text stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enhancing_unknown_task_is_not_found(harness: Harness) -> Result<(), eyre::Report> {
    let Err(err) = harness
        .use_cases
        .enhance
        .execute(taskwise::task::domain::TaskId::new())
        .await
    else {
        eyre::bail!("unknown task was enhanced");
    };
    eyre::ensure!(err.kind() == ErrorKind::NotFound, "expected not found");
    Ok(())
}
