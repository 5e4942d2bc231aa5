//! Access-control configuration.
//!
//! - `UNMAPPED_ROUTE_POLICY`: `allow` (default) or `deny` for routes missing
//!   from the route table
//! - `LOGIN_PATH`: where unauthenticated page requests are sent (default `/login`)
//! - `UNAUTHORIZED_PATH`: where denied page requests are sent (default `/unauthorized`)
//! - `LANDING_PATH`: where a completed login goes when it carries no usable
//!   `redirect` (default `/app/dashboard`)
//! - `SESSION_COOKIE`: cookie carrying the access token for page requests
//!   (default `walky_session`)

use std::env;

use walky_permissions::{PermissionError, UnmappedRoutePolicy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub unmapped_route_policy: UnmappedRoutePolicy,
    pub login_path: String,
    pub unauthorized_path: String,
    pub landing_path: String,
    pub session_cookie: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            unmapped_route_policy: UnmappedRoutePolicy::Allow,
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            landing_path: "/app/dashboard".to_string(),
            session_cookie: "walky_session".to_string(),
        }
    }
}

impl AccessConfig {
    /// An unparseable `UNMAPPED_ROUTE_POLICY` is an error rather than a silent default.
    pub fn from_env() -> Result<Self, PermissionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PermissionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let unmapped_route_policy = match lookup("UNMAPPED_ROUTE_POLICY") {
            Some(value) => value.parse()?,
            None => defaults.unmapped_route_policy,
        };

        Ok(Self {
            unmapped_route_policy,
            login_path: lookup("LOGIN_PATH").unwrap_or(defaults.login_path),
            unauthorized_path: lookup("UNAUTHORIZED_PATH").unwrap_or(defaults.unauthorized_path),
            landing_path: lookup("LANDING_PATH").unwrap_or(defaults.landing_path),
            session_cookie: lookup("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
        })
    }
}
