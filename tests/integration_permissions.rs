mod common;

use axum::http::StatusCode;
use common::{body_json, get, setup_test_app, token_for};
use walky_permissions::Role;

#[tokio::test]
async fn test_own_permissions_cover_every_resource() {
    let token = token_for(Role::Moderator);
    let response = get(setup_test_app(), "/api/permissions", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["role"], "moderator");

    let permissions = body["permissions"].as_object().unwrap();
    assert_eq!(permissions.len(), 19);
    assert_eq!(permissions["active_students"]["read"], false);
    assert_eq!(permissions["events_manager"]["update"], true);
    assert_eq!(permissions["events_manager"]["create"], false);
}

#[tokio::test]
async fn test_check_moderator_cannot_read_active_students() {
    let token = token_for(Role::Moderator);
    let response = get(
        setup_test_app(),
        "/api/permissions/check?resource=active_students&action=read",
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn test_check_super_admin_manages_roles() {
    let token = token_for(Role::SuperAdmin);
    let response = get(
        setup_test_app(),
        "/api/permissions/check?resource=role_management&action=manage",
        Some(&token),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["allowed"], true);
    assert_eq!(body["action"], "manage");
}

#[tokio::test]
async fn test_check_defaults_to_read() {
    let token = token_for(Role::CampusAdmin);
    let response = get(
        setup_test_app(),
        "/api/permissions/check?resource=events_manager",
        Some(&token),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["action"], "read");
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_check_unknown_resource_is_bad_request() {
    let token = token_for(Role::SuperAdmin);
    let response = get(
        setup_test_app(),
        "/api/permissions/check?resource=payroll&action=read",
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("payroll"));
}

#[tokio::test]
async fn test_check_unknown_action_is_bad_request() {
    let token = token_for(Role::SuperAdmin);
    let response = get(
        setup_test_app(),
        "/api/permissions/check?resource=events_manager&action=approve",
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_matrix_is_hidden_from_moderator() {
    let token = token_for(Role::Moderator);
    let response = get(setup_test_app(), "/api/permissions/matrix", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_matrix_is_hidden_from_walky_internal() {
    let token = token_for(Role::WalkyInternal);
    let response = get(setup_test_app(), "/api/permissions/matrix", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_matrix_requires_session() {
    let response = get(setup_test_app(), "/api/permissions/matrix", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_matrix_lists_every_role_for_campus_admin() {
    let token = token_for(Role::CampusAdmin);
    let response = get(setup_test_app(), "/api/permissions/matrix", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let roles = body["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 5);
    assert_eq!(roles[0]["role"], "super_admin");
    assert_eq!(roles[4]["role"], "walky_internal");
    assert_eq!(
        roles[4]["permissions"]["engagement_analytics"]["read"],
        false
    );
}
