mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, setup_test_app, token_for};
use serde_json::json;
use walky_permissions::Role;

#[tokio::test]
async fn test_list_roles_with_rank() {
    let token = token_for(Role::Moderator);
    let response = get(setup_test_app(), "/api/roles", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let roles = body.as_array().unwrap();
    assert_eq!(roles.len(), 5);
    assert_eq!(roles[0]["role"], "super_admin");
    assert_eq!(roles[0]["display_name"], "Super Admin");
    assert_eq!(roles[0]["rank"], 4);
}

#[tokio::test]
async fn test_super_admin_assignable_roles_in_order() {
    let token = token_for(Role::SuperAdmin);
    let response = get(setup_test_app(), "/api/roles/assignable", Some(&token)).await;

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["display_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["School Admin", "Campus Admin", "Moderator"]);
}

#[tokio::test]
async fn test_moderator_assigns_nothing() {
    let token = token_for(Role::Moderator);
    let response = get(setup_test_app(), "/api/roles/assignable", Some(&token)).await;

    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_campus_admin_can_assign_moderator() {
    let token = token_for(Role::CampusAdmin);
    let response = post_json(
        setup_test_app(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_role": "moderator" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["allowed"], true);
    assert_eq!(body["target_role"], "moderator");
}

#[tokio::test]
async fn test_moderator_cannot_assign_campus_admin() {
    let token = token_for(Role::Moderator);
    let response = post_json(
        setup_test_app(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_role": "campus_admin" }),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn test_can_assign_by_display_name() {
    let token = token_for(Role::SchoolAdmin);
    let app = setup_test_app();

    let response = post_json(
        app.clone(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_display_name": "Campus Admin" }),
    )
    .await;
    assert_eq!(body_json(response).await["allowed"], true);

    let response = post_json(
        app,
        "/api/roles/can-assign",
        &token,
        json!({ "target_display_name": "School Admin" }),
    )
    .await;
    assert_eq!(body_json(response).await["allowed"], false);
}

#[tokio::test]
async fn test_unknown_target_is_not_assignable() {
    let token = token_for(Role::SuperAdmin);
    let response = post_json(
        setup_test_app(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_role": "overlord" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["allowed"], false);
    assert!(body["target_role"].is_null());
}

#[tokio::test]
async fn test_can_assign_requires_exactly_one_target() {
    let token = token_for(Role::SuperAdmin);
    let app = setup_test_app();

    let response = post_json(app.clone(), "/api/roles/can-assign", &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        app,
        "/api/roles/can-assign",
        &token,
        json!({ "target_role": "moderator", "target_display_name": "Moderator" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Exactly one of target_role or target_display_name is required"
    );
}

#[tokio::test]
async fn test_can_assign_rejects_wrong_field_type() {
    let token = token_for(Role::SuperAdmin);
    let response = post_json(
        setup_test_app(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_role": 3 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_can_assign_rejects_misspelt_field() {
    let token = token_for(Role::SuperAdmin);
    let response = post_json(
        setup_test_app(),
        "/api/roles/can-assign",
        &token,
        json!({ "target_rol": "moderator" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unknown field `target_rol`");
}
