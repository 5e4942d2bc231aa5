//! Authentication guard state.
//!
//! A request starts in [`SessionState::Loading`] while its token is checked and
//! moves exactly once, into [`SessionState::Authenticated`] or
//! [`SessionState::Unauthenticated`]. Both are terminal. Expiry is whatever the
//! token's `exp` says; nothing here refreshes a session.

use tracing::debug;
use walky_config::JwtConfig;

use crate::claims::Claims;
use crate::jwt::verify_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthenticatedReason {
    MissingToken,
    InvalidToken,
}

impl UnauthenticatedReason {
    pub fn message(&self) -> &'static str {
        match self {
            UnauthenticatedReason::MissingToken => "Missing authorization header",
            UnauthenticatedReason::InvalidToken => "Invalid or expired token",
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionState {
    Loading,
    Authenticated(Claims),
    Unauthenticated(UnauthenticatedReason),
}

impl SessionState {
    /// Resolve the session from an optional bearer token.
    pub fn from_token(token: Option<&str>, jwt_config: &JwtConfig) -> Self {
        SessionState::Loading.resolve(token, jwt_config)
    }

    /// Perform the `Loading` transition. Terminal states are returned unchanged.
    pub fn resolve(self, token: Option<&str>, jwt_config: &JwtConfig) -> Self {
        if self.is_terminal() {
            return self;
        }

        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return SessionState::Unauthenticated(UnauthenticatedReason::MissingToken);
        };

        match verify_token(token, jwt_config) {
            Ok(claims) => SessionState::Authenticated(claims),
            Err(err) => {
                debug!(error = %err.error, "session token rejected");
                SessionState::Unauthenticated(UnauthenticatedReason::InvalidToken)
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Loading)
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            SessionState::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Login URL that carries the originally requested location in a `redirect`
/// query parameter.
pub fn login_redirect(login_path: &str, requested: &str) -> String {
    let separator = if login_path.contains('?') { '&' } else { '?' };
    format!(
        "{login_path}{separator}redirect={}",
        urlencoding::encode(requested)
    )
}

/// Where to send a user after login. Only same-origin relative paths are
/// honoured; anything else (absolute URLs, protocol-relative `//host`) falls
/// back to `default`.
pub fn post_login_target<'a>(redirect: Option<&'a str>, default: &'a str) -> &'a str {
    match redirect {
        Some(target)
            if target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') =>
        {
            target
        }
        _ => default,
    }
}
