use axum::{Json, extract::State};
use tracing::{info, instrument};
use walky_permissions::Role;

use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CanAssignRequest, CanAssignResponse, RoleInfo};

/// List roles
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Every role with its display name and rank", body = [RoleInfo]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_roles(_auth_user: AuthUser) -> Json<Vec<RoleInfo>> {
    Json(Role::ALL.into_iter().map(RoleInfo::from).collect())
}

/// Roles the caller may assign
#[utoipa::path(
    get,
    path = "/api/roles/assignable",
    responses(
        (status = 200, description = "Assignable roles in hierarchy order", body = [RoleInfo]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(role = %auth_user.role))]
pub async fn get_assignable_roles(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<Vec<RoleInfo>> {
    let roles = state
        .access
        .assignable_roles(auth_user.role)
        .iter()
        .copied()
        .map(RoleInfo::from)
        .collect();

    Json(roles)
}

/// Check a role assignment
///
/// Unknown targets are never assignable.
#[utoipa::path(
    post,
    path = "/api/roles/can-assign",
    request_body = CanAssignRequest,
    responses(
        (status = 200, description = "Whether the caller may assign the target role", body = CanAssignResponse),
        (status = 400, description = "Malformed body or unknown field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Neither or both targets given", body = ErrorResponse)
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(role = %auth_user.role))]
pub async fn can_assign(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CanAssignRequest>,
) -> Json<CanAssignResponse> {
    let target_role = match (&dto.target_role, &dto.target_display_name) {
        (Some(name), _) if !name.trim().is_empty() => name.parse::<Role>().ok(),
        (_, Some(display_name)) => Role::from_display_name(display_name),
        _ => None,
    };

    let allowed =
        target_role.is_some_and(|target| state.access.can_assign_role(auth_user.role, target));

    if !allowed {
        info!(
            target_role = ?dto.target_role,
            target_display_name = ?dto.target_display_name,
            "Role assignment not permitted"
        );
    }

    Json(CanAssignResponse {
        target_role,
        allowed,
    })
}
