use axum::{
    Json,
    extract::{Query, State},
};
use tracing::{debug, instrument};
use walky_core::AppError;
use walky_permissions::{Action, Resource, Role};

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::model::{
    PermissionCheckQuery, PermissionCheckResponse, PermissionMatrixResponse, RolePermissions,
};

/// Caller's permissions
#[utoipa::path(
    get,
    path = "/api/permissions",
    responses(
        (status = 200, description = "Grant row for every resource", body = RolePermissions),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(role = %auth_user.role))]
pub async fn get_my_permissions(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<RolePermissions> {
    Json(RolePermissions {
        role: auth_user.role,
        permissions: state.access.role_permissions(auth_user.role),
    })
}

/// Check one permission
#[utoipa::path(
    get,
    path = "/api/permissions/check",
    params(PermissionCheckQuery),
    responses(
        (status = 200, description = "Decision for the caller's role", body = PermissionCheckResponse),
        (status = 400, description = "Unknown resource or action", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(role = %auth_user.role))]
pub async fn check_permission(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<PermissionCheckQuery>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let resource: Resource = query.resource.parse().map_err(AppError::bad_request)?;
    let action: Action = match query.action.as_deref() {
        Some(action) => action.parse().map_err(AppError::bad_request)?,
        None => Action::default(),
    };

    let allowed = state.access.has_permission(auth_user.role, resource, action);
    track_authorization_check(resource, action, allowed);
    debug!(%resource, %action, allowed, "Permission checked");

    Ok(Json(PermissionCheckResponse {
        role: auth_user.role,
        resource,
        action,
        allowed,
    }))
}

/// Full permission matrix
///
/// Only served to roles that can read role management; everyone else gets `404`.
#[utoipa::path(
    get,
    path = "/api/permissions/matrix",
    responses(
        (status = 200, description = "Every role's grants", body = PermissionMatrixResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not available to this role", body = ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
pub async fn get_permission_matrix(
    State(state): State<AppState>,
) -> Json<PermissionMatrixResponse> {
    let roles = Role::ALL
        .into_iter()
        .map(|role| RolePermissions {
            role,
            permissions: state.access.role_permissions(role),
        })
        .collect();

    Json(PermissionMatrixResponse { roles })
}
