//! Task handlers.
//!
//! All task routes require an authenticated user. Any authenticated user may
//! create and update tasks; deletion is restricted to the task's creator via
//! the ownership guard, and a denied deletion answers exactly like deleting
//! a task that does not exist.

use crate::{
    auth::{guard, middleware::CurrentUser},
    types::{AppError, CreateTaskRequest, Result, Task, UpdateTaskRequest},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn task_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task {} not found", id))
}

/// Create a task
///
/// The acting user becomes the task's creator; that ownership never changes.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Invalid input")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(acting): CurrentUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>)> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Task name is required".to_string()));
    }

    let task = state
        .store
        .create_task(
            &payload.name,
            payload.description.as_deref(),
            payload.status_id,
            acting.id,
            payload.executor_id,
            &payload.label_ids,
        )
        .await?;

    tracing::info!(task_id = task.id, creator_id = acting.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// List tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 401, description = "Not authenticated")
    ),
    tag = "tasks"
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.store.list_tasks().await?))
}

/// Get a task
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Task>> {
    let task = state
        .store
        .get_task(id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(task))
}

/// Update a task
///
/// Open to any authenticated user; the creator is not special here and the
/// stored `creator_id` is never modified.
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let updated = state.store.update_task(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a task (creator only)
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(acting): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let task = state
        .store
        .get_task(id)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    // Same response for "not yours" as for "does not exist": ownership of a
    // task is not observable to anyone but its creator.
    if !guard::authorize(Some(&acting), &task).is_allowed() {
        return Err(task_not_found(id));
    }

    state.store.delete_task(id).await?;

    tracing::info!(task_id = id, user_id = acting.id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
