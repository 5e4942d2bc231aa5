use axum::{Router, middleware, routing::get};
use walky_permissions::{Action, PermissionGuard, Resource};

use crate::middleware::guard::{GuardState, enforce_permission};
use crate::state::AppState;

use super::controller::{check_permission, get_my_permissions, get_permission_matrix};

pub fn init_permissions_router(state: AppState) -> Router<AppState> {
    let matrix_guard = PermissionGuard::new(Resource::RoleManagement).action(Action::Read);

    Router::new()
        .route("/", get(get_my_permissions))
        .route("/check", get(check_permission))
        .route(
            "/matrix",
            get(get_permission_matrix).route_layer(middleware::from_fn_with_state(
                GuardState::new(state, matrix_guard),
                enforce_permission,
            )),
        )
}
