use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{can_assign, get_assignable_roles, get_roles};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles))
        .route("/assignable", get(get_assignable_roles))
        .route("/can-assign", post(can_assign))
}
