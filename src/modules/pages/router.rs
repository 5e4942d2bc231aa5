use axum::{Router, middleware, routing::get};

use crate::middleware::auth::require_auth;
use crate::middleware::role::require_route_access;
use crate::state::AppState;

use super::controller::get_page_context;

/// Page shells under `/app`. The session guard runs before the route guard.
pub fn init_pages_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{*path}", get(get_page_context))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_route_access,
        ))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
