//! Route-to-resource map and route-level access checks.
//!
//! Paths are matched by exact string equality. A mapped path is readable iff
//! the role holds `read` on its resource. What happens to an unmapped path is
//! decided by the table's [`UnmappedRoutePolicy`], which defaults to
//! [`UnmappedRoutePolicy::Allow`]: unmapped routes are open to every role.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::PermissionError;
use crate::matrix::PermissionMatrix;
use crate::resource::{Action, Resource};
use crate::role::Role;

const STANDARD_ROUTES: [(&str, Resource); 19] = [
    ("/engagement-analytics", Resource::EngagementAnalytics),
    ("/popularity-analytics", Resource::PopularityAnalytics),
    ("/user-interactions", Resource::UserInteractions),
    ("/student-behavior", Resource::StudentBehavior),
    ("/student-safety", Resource::StudentSafety),
    ("/students/active", Resource::ActiveStudents),
    ("/students/disengaged", Resource::DisengagedStudents),
    ("/students/deactivated", Resource::DeactivatedUsers),
    ("/students/banned", Resource::BannedUsers),
    ("/students/flagged", Resource::FlaggedUsers),
    ("/ambassadors", Resource::Ambassadors),
    ("/events", Resource::EventsManager),
    ("/spaces", Resource::SpacesManager),
    ("/ideas", Resource::IdeasManager),
    ("/reported-content", Resource::ReportedContent),
    ("/settings/campus", Resource::CampusSettings),
    ("/settings/school", Resource::SchoolSettings),
    ("/settings/roles", Resource::RoleManagement),
    ("/settings/admins", Resource::AdminUsers),
];

static STANDARD_TABLE: LazyLock<RouteTable> = LazyLock::new(RouteTable::default);

/// What to do with a path the table does not map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedRoutePolicy {
    #[default]
    Allow,
    Deny,
}

impl UnmappedRoutePolicy {
    pub const fn allows(&self) -> bool {
        matches!(self, UnmappedRoutePolicy::Allow)
    }
}

impl fmt::Display for UnmappedRoutePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmappedRoutePolicy::Allow => f.write_str("allow"),
            UnmappedRoutePolicy::Deny => f.write_str("deny"),
        }
    }
}

impl FromStr for UnmappedRoutePolicy {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(UnmappedRoutePolicy::Allow),
            "deny" => Ok(UnmappedRoutePolicy::Deny),
            _ => Err(PermissionError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(&'static str, Resource)>,
    unmapped: UnmappedRoutePolicy,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: STANDARD_ROUTES.to_vec(),
            unmapped: UnmappedRoutePolicy::default(),
        }
    }
}

impl RouteTable {
    /// The standard table with the default (allow) policy.
    pub fn standard() -> &'static RouteTable {
        &STANDARD_TABLE
    }

    pub fn new(routes: Vec<(&'static str, Resource)>, unmapped: UnmappedRoutePolicy) -> Self {
        Self { routes, unmapped }
    }

    pub fn with_policy(mut self, unmapped: UnmappedRoutePolicy) -> Self {
        self.unmapped = unmapped;
        self
    }

    pub fn policy(&self) -> UnmappedRoutePolicy {
        self.unmapped
    }

    pub fn resource_for(&self, path: &str) -> Option<Resource> {
        self.routes
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, resource)| *resource)
    }

    /// Mapped paths in table order.
    pub fn entries(&self) -> &[(&'static str, Resource)] {
        &self.routes
    }

    pub fn can_access(&self, matrix: &PermissionMatrix, role: Role, path: &str) -> bool {
        match self.resource_for(path) {
            Some(resource) => matrix.has_permission(role, resource, Action::Read),
            None => self.unmapped.allows(),
        }
    }

    /// Route check for a role string that may not parse. An unknown role is
    /// denied on mapped paths and gets the unmapped policy elsewhere.
    pub fn can_access_str(&self, matrix: &PermissionMatrix, role: &str, path: &str) -> bool {
        match (self.resource_for(path), role.parse::<Role>()) {
            (None, _) => self.unmapped.allows(),
            (Some(resource), Ok(role)) => matrix.has_permission(role, resource, Action::Read),
            (Some(resource), Err(_)) => {
                debug!(role, path, %resource, "unrecognised role on mapped route, denying");
                false
            }
        }
    }
}

/// Route check against the standard matrix and table.
pub fn can_access_route(role: Role, path: &str) -> bool {
    RouteTable::standard().can_access(PermissionMatrix::standard(), role, path)
}

pub fn can_access_route_str(role: &str, path: &str) -> bool {
    RouteTable::standard().can_access_str(PermissionMatrix::standard(), role, path)
}
