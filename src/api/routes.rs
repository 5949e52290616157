use crate::auth::middleware::session_middleware;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Builds the application router.
///
/// The session middleware wraps every route, anonymous ones included, so each
/// request carries a resolved session state before any handler runs. Which
/// routes actually require a user is decided by the handlers' extractors.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/session",
            post(crate::api::handlers::session::login)
                .delete(crate::api::handlers::session::logout),
        )
        .route(
            "/api/users",
            get(crate::api::handlers::users::list_users)
                .post(crate::api::handlers::users::register),
        )
        .route(
            "/api/users/{id}",
            axum::routing::patch(crate::api::handlers::users::update_user)
                .delete(crate::api::handlers::users::delete_user),
        )
        .route(
            "/api/statuses",
            get(crate::api::handlers::statuses::list_statuses)
                .post(crate::api::handlers::statuses::create_status),
        )
        .route(
            "/api/statuses/{id}",
            axum::routing::patch(crate::api::handlers::statuses::update_status)
                .delete(crate::api::handlers::statuses::delete_status),
        )
        .route(
            "/api/labels",
            get(crate::api::handlers::labels::list_labels)
                .post(crate::api::handlers::labels::create_label),
        )
        .route(
            "/api/labels/{id}",
            axum::routing::patch(crate::api::handlers::labels::update_label)
                .delete(crate::api::handlers::labels::delete_label),
        )
        .route(
            "/api/tasks",
            get(crate::api::handlers::tasks::list_tasks)
                .post(crate::api::handlers::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            get(crate::api::handlers::tasks::get_task)
                .patch(crate::api::handlers::tasks::update_task)
                .delete(crate::api::handlers::tasks::delete_task),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .with_state(state)
}
