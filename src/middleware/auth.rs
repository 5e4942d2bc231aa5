use axum::{
    extract::{FromRequestParts, OriginalUri, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, info};
use uuid::Uuid;
use walky_auth::{Claims, SessionState, UnauthenticatedReason, login_redirect};
use walky_core::AppError;
use walky_permissions::Role;

use crate::metrics::track_session;
use crate::state::AppState;

/// An authenticated administrator whose role has been recognised.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub role: Role,
}

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }

    pub fn email(&self) -> &str {
        &self.claims.email
    }

    pub fn school_id(&self) -> Option<Uuid> {
        self.claims.school_id
    }

    pub fn campus_id(&self) -> Option<Uuid> {
        self.claims.campus_id
    }
}

/// Bearer token from the `Authorization` header, or else the session cookie.
/// A blank bearer value counts as no header.
fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let bearer = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    bearer.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
    })
}

enum Rejection {
    Unauthenticated(UnauthenticatedReason),
    UnknownRole(String),
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Unauthenticated(reason) => {
                AppError::unauthorized(reason.message().to_string())
            }
            Rejection::UnknownRole(role) => {
                AppError::forbidden(format!("Unrecognised role in session: {}", role))
            }
        }
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthUser, Rejection> {
    let token = session_token(parts, &state.access_config.session_cookie);

    let claims = match SessionState::from_token(token.as_deref(), &state.jwt_config) {
        SessionState::Authenticated(claims) => claims,
        SessionState::Unauthenticated(reason) => {
            track_session(match reason {
                UnauthenticatedReason::MissingToken => "missing_token",
                UnauthenticatedReason::InvalidToken => "invalid_token",
            });
            return Err(Rejection::Unauthenticated(reason));
        }
        SessionState::Loading => {
            return Err(Rejection::Unauthenticated(UnauthenticatedReason::InvalidToken));
        }
    };

    match claims.role() {
        Ok(role) => {
            track_session("authenticated");
            Ok(AuthUser { claims, role })
        }
        Err(e) => {
            track_session("unknown_role");
            info!(user_id = %claims.sub, error = %e, "Session rejected");
            Err(Rejection::UnknownRole(claims.role))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        Ok(authenticate(parts, state)?)
    }
}

/// Path and query of the request as the client sent it, before any nesting.
pub(crate) fn requested_location(req: &Request) -> String {
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| req.uri());

    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

fn is_api_request(location: &str) -> bool {
    location == "/api" || location.starts_with("/api/") || location.starts_with("/api?")
}

/// Authentication guard.
///
/// API requests without a valid session get `401`; page requests are sent to
/// the login page with the requested location preserved. A session whose role
/// is not recognised gets `403` either way.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let location = requested_location(&req);
    let (mut parts, body) = req.into_parts();

    match authenticate(&parts, &state) {
        Ok(user) => {
            parts.extensions.insert(user);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(Rejection::Unauthenticated(reason)) if !is_api_request(&location) => {
            debug!(location = %location, reason = ?reason, "Redirecting to login");
            Redirect::to(&login_redirect(&state.access_config.login_path, &location))
                .into_response()
        }
        Err(rejection) => AppError::from(rejection).into_response(),
    }
}
