use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;
use walky_core::AppError;
use walky_permissions::{GuardDecision, PermissionGuard};

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// State for [`enforce_permission`]: the app state plus the guard to apply.
#[derive(Clone, Debug)]
pub struct GuardState {
    pub app: AppState,
    pub guard: PermissionGuard,
}

impl GuardState {
    pub fn new(app: AppState, guard: PermissionGuard) -> Self {
        Self { app, guard }
    }
}

/// Permission guard for a whole router.
///
/// `Hidden` answers `404` so the resource is not advertised, `Redirect` answers
/// `303`, and `Content` answers `403` with the fallback text.
pub async fn enforce_permission(
    State(GuardState { app, guard }): State<GuardState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let user = match AuthUser::from_request_parts(&mut parts, &app).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    let decision = app.access.decide(&guard, Some(user.role));
    track_authorization_check(guard.resource, guard.action, decision.is_render());

    match decision {
        GuardDecision::Render => next.run(Request::from_parts(parts, body)).await,
        denied => {
            info!(
                role = %user.role,
                resource = %guard.resource,
                action = %guard.action,
                "Permission guard denied request"
            );
            match denied {
                GuardDecision::Redirect(path) => Redirect::to(&path).into_response(),
                GuardDecision::Fallback(text) => AppError::forbidden(text).into_response(),
                _ => AppError::not_found(anyhow!("Not found")).into_response(),
            }
        }
    }
}
