//! Label handlers. Plain authenticated CRUD; labels have no owner.

use crate::{
    auth::middleware::CurrentUser,
    types::{AppError, Label, NameRequest, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Create a label
#[utoipa::path(
    post,
    path = "/api/labels",
    request_body = NameRequest,
    responses(
        (status = 201, description = "Label created", body = Label),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Label already exists"),
        (status = 422, description = "Invalid input")
    ),
    tag = "labels"
)]
pub async fn create_label(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Json(payload): Json<NameRequest>,
) -> Result<(StatusCode, Json<Label>)> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Label name is required".to_string()));
    }
    let label = state.store.create_label(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(label)))
}

/// List labels
#[utoipa::path(
    get,
    path = "/api/labels",
    responses(
        (status = 200, description = "List of labels", body = Vec<Label>),
        (status = 401, description = "Not authenticated")
    ),
    tag = "labels"
)]
pub async fn list_labels(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
) -> Result<Json<Vec<Label>>> {
    Ok(Json(state.store.list_labels().await?))
}

/// Rename a label
#[utoipa::path(
    patch,
    path = "/api/labels/{id}",
    params(("id" = i64, Path, description = "Label ID")),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Label updated", body = Label),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Label not found")
    ),
    tag = "labels"
)]
pub async fn update_label(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<Label>> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Label name is required".to_string()));
    }
    Ok(Json(state.store.update_label(id, &payload.name).await?))
}

/// Delete a label
#[utoipa::path(
    delete,
    path = "/api/labels/{id}",
    params(("id" = i64, Path, description = "Label ID")),
    responses(
        (status = 204, description = "Label deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Label not found"),
        (status = 409, description = "Label is in use")
    ),
    tag = "labels"
)]
pub async fn delete_label(
    State(state): State<AppState>,
    CurrentUser(_acting): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store.delete_label(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
