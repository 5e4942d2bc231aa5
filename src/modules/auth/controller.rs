use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use tracing::{debug, instrument};
use walky_auth::post_login_target;
use walky_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;

use super::model::{CurrentUser, LoginCompleteQuery};

/// Current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated administrator", body = CurrentUser),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Unrecognised role in session", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(role = %auth_user.role))]
pub async fn get_current_user(auth_user: AuthUser) -> Result<Json<CurrentUser>, AppError> {
    Ok(Json(CurrentUser {
        id: auth_user.user_id()?,
        email: auth_user.email().to_string(),
        role: auth_user.role,
        role_display_name: auth_user.role.display_name().to_string(),
        school_id: auth_user.school_id(),
        campus_id: auth_user.campus_id(),
        expires_at: auth_user.claims.exp,
    }))
}

/// Complete login
///
/// Where the login page hands off once a session exists. Sends the user back
/// to the location they were stopped at, or to the landing page when that
/// location is missing or not a same-origin path.
#[utoipa::path(
    get,
    path = "/login/complete",
    params(LoginCompleteQuery),
    responses(
        (status = 303, description = "Redirect to the requested location or the landing page"),
        (status = 403, description = "Unrecognised role in session", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn complete_login(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<LoginCompleteQuery>,
) -> Redirect {
    let target = post_login_target(query.redirect.as_deref(), &state.access_config.landing_path);
    debug!(role = %auth_user.role, target = %target, "Login completed");

    Redirect::to(target)
}
