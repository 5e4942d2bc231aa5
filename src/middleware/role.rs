//! Role-protected page routes.
//!
//! Page shells are served under `/app`; the rest of the path is the dashboard
//! route checked against the route table.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info};
use walky_core::AppError;

use crate::metrics::track_route_access;
use crate::middleware::auth::{AuthUser, requested_location};
use crate::state::AppState;

pub const PAGE_PREFIX: &str = "/app";

/// The dashboard route [`require_route_access`] approved. Page handlers read
/// this instead of re-deriving the route from their own path extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute(pub String);

/// Dashboard route for a page request: `/app/students/active?x=1` becomes
/// `/students/active`.
///
/// Returns `None` for paths that are not in canonical form: percent-encoded
/// bytes, empty segments other than a trailing slash, and `.` or `..`
/// segments. Such a path could decode to a different route than the one
/// checked.
pub fn dashboard_route(location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let route = path.strip_prefix(PAGE_PREFIX)?;

    if route.is_empty() {
        return Some("/".to_string());
    }
    if !route.starts_with('/') || route.contains('%') {
        return None;
    }

    let segments: Vec<&str> = route.split('/').skip(1).collect();
    let last = segments.len() - 1;
    let canonical = segments.iter().enumerate().all(|(i, segment)| match *segment {
        "" => i == last,
        "." | ".." => false,
        _ => true,
    });

    canonical.then(|| route.to_string())
}

/// Route guard. Must run after `require_auth`; a denied role is redirected to
/// the configured unauthorized page. A non-canonical page path answers `404`.
pub async fn require_route_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let location = requested_location(&req);
    let Some(route) = dashboard_route(&location) else {
        debug!(location = %location, "Non-canonical page path");
        return AppError::not_found(anyhow!("Not found")).into_response();
    };
    let (mut parts, body) = req.into_parts();

    let user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    let allowed = state.access.can_access_route(user.role, &route);
    track_route_access(user.role, allowed);

    if !allowed {
        info!(role = %user.role, route = %route, "Route access denied");
        return Redirect::to(&state.access_config.unauthorized_path).into_response();
    }

    parts.extensions.insert(PageRoute(route));
    next.run(Request::from_parts(parts, body)).await
}
