use axum::{Extension, Json, extract::State};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::PageRoute;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::model::PageContext;

/// Page context
///
/// Reached only after the session and route guards have passed. The route
/// reported is the one the route guard checked.
#[utoipa::path(
    get,
    path = "/app/{path}",
    params(
        ("path" = String, Path, description = "Dashboard route without the leading slash")
    ),
    responses(
        (status = 200, description = "Page context for the caller's role", body = PageContext),
        (status = 303, description = "Redirect to login or to the unauthorized page"),
        (status = 404, description = "Page path is not in canonical form", body = ErrorResponse),
        (status = 403, description = "Unrecognised role in session", body = ErrorResponse)
    ),
    tag = "Pages",
    security(("bearer_auth" = []))
)]
pub async fn get_page_context(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Extension(PageRoute(path)): Extension<PageRoute>,
) -> Json<PageContext> {
    let resource = state.access.routes().resource_for(&path);
    let actions = resource
        .map(|resource| state.access.permissions(auth_user.role, resource).granted_actions())
        .unwrap_or_default();

    Json(PageContext {
        path,
        resource,
        actions,
    })
}
