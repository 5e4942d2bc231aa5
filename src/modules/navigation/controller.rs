use axum::{Json, extract::State};

use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::model::NavigationResponse;

/// Sidebar for the caller
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Navigation filtered by route access", body = NavigationResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        role: auth_user.role,
        items: state.access.navigation(auth_user.role),
    })
}
