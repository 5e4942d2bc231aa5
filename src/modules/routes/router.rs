use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_route_access, get_routes};

pub fn init_routes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_routes))
        .route("/access", get(check_route_access))
}
