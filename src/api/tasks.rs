//! Handlers for the `/tasks` resource.

use super::{AppState, error::ApiError, error::ApiRejection};
use crate::task::{
    domain::{Task, TaskId},
    validation::{
        FieldIssue, ListTasksQuery, ValidationErrors, parse_create_task, parse_update_task,
    },
};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;

type HandlerResult<T> = Result<T, ApiRejection>;

/// Routes mounted under `/tasks`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_task).get(list_tasks))
        .route("/:id", get(get_task).patch(update_task).delete(delete_task))
        .route("/:id/enhance", post(enhance_task))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Task>)> {
    let Json(raw) = body.map_err(|rejection| state.reject(malformed_body(&rejection)))?;
    let command = parse_create_task(&raw).map_err(|err| state.reject(err))?;
    let task = state
        .tasks
        .create
        .execute(command.params, command.auto_enhance)
        .await
        .map_err(|err| state.reject(err))?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> HandlerResult<Json<Vec<Task>>> {
    let Query(params) = query.map_err(|rejection| {
        state.reject(ValidationErrors::from_issues(vec![FieldIssue::new(
            "query",
            rejection.body_text(),
        )]))
    })?;
    let filter = params.into_filter().map_err(|err| state.reject(err))?;
    let tasks = state
        .tasks
        .list
        .execute(&filter)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(tasks))
}

async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Task>> {
    let id = state.task_id(raw_id)?;
    let task = state
        .tasks
        .list
        .get(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(task))
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<Json<Task>> {
    let id = state.task_id(raw_id)?;
    let Json(raw) = body.map_err(|rejection| state.reject(malformed_body(&rejection)))?;
    let patch = parse_update_task(&raw).map_err(|err| state.reject(err))?;
    let task = state
        .tasks
        .update
        .execute(id, patch)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<StatusCode> {
    // Ids that are not UUIDs name no task.
    let Some(id) = TaskId::parse(&raw_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    state
        .tasks
        .delete
        .execute(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn enhance_task(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Task>> {
    let id = state.task_id(raw_id)?;
    let task = state
        .tasks
        .enhance
        .execute(id)
        .await
        .map_err(|err| state.reject(err))?;
    Ok(Json(task))
}

fn malformed_body(rejection: &JsonRejection) -> ValidationErrors {
    ValidationErrors::from_issues(vec![FieldIssue::new("body", rejection.body_text())])
}

impl AppState {
    fn reject(&self, err: impl Into<ApiError>) -> ApiRejection {
        err.into().in_mode(self.mode)
    }

    fn task_id(&self, raw: String) -> HandlerResult<TaskId> {
        TaskId::parse(&raw).ok_or_else(|| self.reject(ApiError::UnknownTask(raw)))
    }
}
