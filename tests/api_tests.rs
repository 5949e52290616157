//! Integration tests for the CRUD surface and the ownership rules that gate
//! its mutations.

mod common;

use axum::http::StatusCode;
use common::{create_status, create_task, signed_in_user, test_server};
use serde_json::json;

#[tokio::test]
async fn health_check_is_public() {
    let server = test_server().await;
    let response = server.get("/api/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn task_crud_for_its_creator() {
    let server = test_server().await;
    let (user_id, token) = signed_in_user(&server, "a@x.com").await;
    let status_id = create_status(&server, &token, "new").await;

    let task_id = create_task(&server, &token, status_id, "Fix the roof").await;

    let response = server
        .get(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let task = response.json::<serde_json::Value>();
    assert_eq!(task["creator_id"].as_i64(), Some(user_id));
    assert_eq!(task["name"].as_str(), Some("Fix the roof"));

    let response = server
        .patch(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&token)
        .json(&json!({ "description": "It is leaking" }))
        .await;
    response.assert_status_ok();

    let response = server
        .delete(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_owner_delete_looks_like_missing_task_and_leaves_it_intact() {
    let server = test_server().await;
    let (_owner_id, owner_token) = signed_in_user(&server, "owner@x.com").await;
    let (_other_id, other_token) = signed_in_user(&server, "other@x.com").await;
    let status_id = create_status(&server, &owner_token, "new").await;
    let task_id = create_task(&server, &owner_token, status_id, "Owned task").await;

    let denied = server
        .delete(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&other_token)
        .await;
    let missing = server
        .delete("/api/tasks/999999")
        .authorization_bearer(&other_token)
        .await;

    // Ownership must not be probeable: denial and absence have the same
    // status and, apart from the id, the same body shape.
    denied.assert_status(StatusCode::NOT_FOUND);
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        denied.text().replace(&task_id.to_string(), "N"),
        missing.text().replace("999999", "N"),
    );

    // The task survived.
    let response = server
        .get(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&owner_token)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn anonymous_delete_is_unauthorized_and_leaves_task_intact() {
    let server = test_server().await;
    let (_owner_id, token) = signed_in_user(&server, "owner@x.com").await;
    let status_id = create_status(&server, &token, "new").await;
    let task_id = create_task(&server, &token, status_id, "Owned task").await;

    let response = server.delete(&format!("/api/tasks/{}", task_id)).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn any_authenticated_user_may_update_a_task() {
    let server = test_server().await;
    let (owner_id, owner_token) = signed_in_user(&server, "owner@x.com").await;
    let (_other_id, other_token) = signed_in_user(&server, "other@x.com").await;
    let status_id = create_status(&server, &owner_token, "new").await;
    let task_id = create_task(&server, &owner_token, status_id, "Shared task").await;

    let response = server
        .patch(&format!("/api/tasks/{}", task_id))
        .authorization_bearer(&other_token)
        .json(&json!({ "name": "Renamed by a colleague" }))
        .await;
    response.assert_status_ok();

    let task = response.json::<serde_json::Value>();
    assert_eq!(task["name"].as_str(), Some("Renamed by a colleague"));
    // Ownership did not move.
    assert_eq!(task["creator_id"].as_i64(), Some(owner_id));
}

#[tokio::test]
async fn users_can_only_mutate_themselves() {
    let server = test_server().await;
    let (a_id, a_token) = signed_in_user(&server, "a@x.com").await;
    let (b_id, _b_token) = signed_in_user(&server, "b@x.com").await;

    // Self-update works.
    let response = server
        .patch(&format!("/api/users/{}", a_id))
        .authorization_bearer(&a_token)
        .json(&json!({ "first_name": "Renamed" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["full_name"].as_str(),
        Some("Renamed User")
    );

    // Updating someone else answers like updating a missing user.
    let denied = server
        .patch(&format!("/api/users/{}", b_id))
        .authorization_bearer(&a_token)
        .json(&json!({ "first_name": "Hijacked" }))
        .await;
    let missing = server
        .patch("/api/users/999999")
        .authorization_bearer(&a_token)
        .json(&json!({ "first_name": "Hijacked" }))
        .await;
    denied.assert_status(StatusCode::NOT_FOUND);
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        denied.text().replace(&b_id.to_string(), "N"),
        missing.text().replace("999999", "N"),
    );
}

#[tokio::test]
async fn user_owning_tasks_cannot_delete_their_account() {
    let server = test_server().await;
    let (user_id, token) = signed_in_user(&server, "a@x.com").await;
    let status_id = create_status(&server, &token, "new").await;
    create_task(&server, &token, status_id, "Still open").await;

    let response = server
        .delete(&format!("/api/users/{}", user_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn user_listing_is_public_and_redacted() {
    let server = test_server().await;
    signed_in_user(&server, "a@x.com").await;

    let response = server.get("/api/users").await;
    response.assert_status_ok();

    let raw = response.text();
    assert!(raw.contains("a@x.com"));
    assert!(!raw.contains("password"));
    assert!(!raw.contains("digest"));
}

#[tokio::test]
async fn statuses_and_labels_require_authentication() {
    let server = test_server().await;

    let response = server
        .post("/api/statuses")
        .json(&json!({"name": "new"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/labels")
        .json(&json!({"name": "bug"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn status_in_use_cannot_be_deleted() {
    let server = test_server().await;
    let (_id, token) = signed_in_user(&server, "a@x.com").await;
    let status_id = create_status(&server, &token, "new").await;
    create_task(&server, &token, status_id, "Uses the status").await;

    let response = server
        .delete(&format!("/api/statuses/{}", status_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn label_crud_and_attachment() {
    let server = test_server().await;
    let (_id, token) = signed_in_user(&server, "a@x.com").await;
    let status_id = create_status(&server, &token, "new").await;

    let response = server
        .post("/api/labels")
        .authorization_bearer(&token)
        .json(&json!({ "name": "bug" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let label_id = response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("label should have an id");

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Labelled task",
            "status_id": status_id,
            "label_ids": [label_id],
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let task = response.json::<serde_json::Value>();
    assert_eq!(task["label_ids"], json!([label_id]));

    // Attached label is protected from deletion.
    let response = server
        .delete(&format!("/api/labels/{}", label_id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn task_creation_validates_references() {
    let server = test_server().await;
    let (_id, token) = signed_in_user(&server, "a@x.com").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Orphan", "status_id": 42 }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
