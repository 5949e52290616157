//! User handlers.
//!
//! Registration is public; every other mutation is self-service only,
//! enforced through the ownership guard with the user record standing in as
//! the resource it owns. A mutation denied by the guard answers exactly like
//! a mutation on a user that does not exist.

use crate::{
    auth::{guard, middleware::CurrentUser, password},
    types::{AppError, RegisterRequest, Result, UpdateUserRequest, UserResponse},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn validate_password(password: &str) -> Result<()> {
    // Digesting an empty secret is fine; accepting one at registration is not.
    if password.len() < 3 {
        return Err(AppError::Validation(
            "Password must be at least 3 characters".to_string(),
        ));
    }
    Ok(())
}

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Invalid input")
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    if payload.email.is_empty() || payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError::Validation(
            "First name, last name and email are required".to_string(),
        ));
    }
    validate_password(&payload.password)?;

    let digest = password::digest(&payload.password);
    let user = state
        .store
        .create_user(
            &payload.first_name,
            &payload.last_name,
            &payload.email,
            &digest,
        )
        .await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Update a user (self-service only)
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(acting): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    let target = state
        .store
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    if !guard::authorize(Some(&acting), &target).is_allowed() {
        return Err(user_not_found(id));
    }

    let digest = match &payload.password {
        Some(password) => {
            validate_password(password)?;
            Some(password::digest(password))
        }
        None => None,
    };

    let updated = state
        .store
        .update_user(
            id,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            payload.email.as_deref(),
            digest.as_deref(),
        )
        .await?;

    Ok(Json(UserResponse::from(updated)))
}

/// Delete a user (self-service only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User still owns tasks")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(acting): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let target = state
        .store
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    if !guard::authorize(Some(&acting), &target).is_allowed() {
        return Err(user_not_found(id));
    }

    state.store.delete_user(id).await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
