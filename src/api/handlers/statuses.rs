//! Status handlers. Plain authenticated CRUD; statuses have no owner.

use crate::{
    auth::middleware::CurrentUser,
    types::{AppError, NameRequest, Result, Status},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Create a status
#[utoipa::path(
    post,
    path = "/api/statuses",
    request_body = NameRequest,
    responses(
        (status = 201, description = "Status created", body = Status),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Status already exists"),
        (status = 422, description = "Invalid input")
    ),
    tag = "statuses"
)]
pub async fn create_status(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Json(payload): Json<NameRequest>,
) -> Result<(StatusCode, Json<Status>)> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Status name is required".to_string()));
    }
    let status = state.store.create_status(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// List statuses
#[utoipa::path(
    get,
    path = "/api/statuses",
    responses(
        (status = 200, description = "List of statuses", body = Vec<Status>),
        (status = 401, description = "Not authenticated")
    ),
    tag = "statuses"
)]
pub async fn list_statuses(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
) -> Result<Json<Vec<Status>>> {
    Ok(Json(state.store.list_statuses().await?))
}

/// Rename a status
#[utoipa::path(
    patch,
    path = "/api/statuses/{id}",
    params(("id" = i64, Path, description = "Status ID")),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Status updated", body = Status),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Status not found")
    ),
    tag = "statuses"
)]
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<Status>> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Status name is required".to_string()));
    }
    Ok(Json(state.store.update_status(id, &payload.name).await?))
}

/// Delete a status
#[utoipa::path(
    delete,
    path = "/api/statuses/{id}",
    params(("id" = i64, Path, description = "Status ID")),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Status not found"),
        (status = 409, description = "Status is in use")
    ),
    tag = "statuses"
)]
pub async fn delete_status(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store.delete_status(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
