use axum::{Router, middleware, routing::get};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{complete_login, get_current_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/me", get(get_current_user))
}

/// `/login/complete` sits outside `/api`, so it carries its own session guard.
/// Without a session it goes back to the login page like any page request.
pub fn init_login_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login/complete", get(complete_login))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
