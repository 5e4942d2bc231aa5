use axum::{
    Json,
    extract::{Query, State},
};

use crate::metrics::track_route_access;
use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::model::{RouteAccessQuery, RouteAccessResponse, RouteEntry, RouteTableResponse};

/// Route table
#[utoipa::path(
    get,
    path = "/api/routes",
    responses(
        (status = 200, description = "Mapped dashboard routes in table order", body = RouteTableResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Routes",
    security(("bearer_auth" = []))
)]
pub async fn get_routes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Json<RouteTableResponse> {
    let table = state.access.routes();
    let routes = table
        .entries()
        .iter()
        .map(|(path, resource)| RouteEntry {
            path: path.to_string(),
            resource: *resource,
        })
        .collect();

    Json(RouteTableResponse {
        unmapped_policy: table.policy(),
        routes,
    })
}

/// Check route access
#[utoipa::path(
    get,
    path = "/api/routes/access",
    params(RouteAccessQuery),
    responses(
        (status = 200, description = "Whether the caller may open the route", body = RouteAccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Routes",
    security(("bearer_auth" = []))
)]
pub async fn check_route_access(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<RouteAccessQuery>,
) -> Json<RouteAccessResponse> {
    let allowed = state.access.can_access_route(auth_user.role, &query.path);
    track_route_access(auth_user.role, allowed);

    Json(RouteAccessResponse {
        resource: state.access.routes().resource_for(&query.path),
        path: query.path,
        allowed,
    })
}
