//! A resolved bundle of the tables an application evaluates against.
//!
//! The free functions in this crate always use the standard tables with the
//! default route policy. Services that take the route policy from
//! configuration build one [`AccessControl`] at startup and pass it around
//! instead.

use std::collections::BTreeMap;

use crate::error::PermissionError;
use crate::guard::{GuardDecision, PermissionGuard};
use crate::hierarchy::RoleHierarchy;
use crate::matrix::PermissionMatrix;
use crate::navigation::{NAVIGATION, NavEntry, filter_items};
use crate::resource::{Action, Resource, ResourcePermission};
use crate::role::Role;
use crate::routes::{RouteTable, UnmappedRoutePolicy};

#[derive(Debug, Clone)]
pub struct AccessControl {
    matrix: &'static PermissionMatrix,
    hierarchy: &'static RoleHierarchy,
    routes: RouteTable,
}

impl Default for AccessControl {
    fn default() -> Self {
        Self::new(UnmappedRoutePolicy::default())
    }
}

impl AccessControl {
    /// Standard tables with the given unmapped-route policy.
    pub fn new(policy: UnmappedRoutePolicy) -> Self {
        Self {
            matrix: PermissionMatrix::standard(),
            hierarchy: RoleHierarchy::standard(),
            routes: RouteTable::default().with_policy(policy),
        }
    }

    /// Validate the tables before serving with them.
    pub fn validated(policy: UnmappedRoutePolicy) -> Result<Self, PermissionError> {
        let access = Self::new(policy);
        access.hierarchy.validate()?;
        Ok(access)
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        self.matrix
    }

    pub fn hierarchy(&self) -> &RoleHierarchy {
        self.hierarchy
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn permissions(&self, role: Role, resource: Resource) -> ResourcePermission {
        self.matrix.permissions(role, resource)
    }

    pub fn has_permission(&self, role: Role, resource: Resource, action: Action) -> bool {
        self.matrix.has_permission(role, resource, action)
    }

    pub fn role_permissions(&self, role: Role) -> BTreeMap<Resource, ResourcePermission> {
        self.matrix.role_permissions(role)
    }

    pub fn can_access_route(&self, role: Role, path: &str) -> bool {
        self.routes.can_access(self.matrix, role, path)
    }

    pub fn can_assign_role(&self, user_role: Role, target_role: Role) -> bool {
        self.hierarchy.can_assign(user_role, target_role)
    }

    pub fn can_assign_role_by_display_name(&self, user_role: Role, display_name: &str) -> bool {
        self.hierarchy
            .can_assign_by_display_name(user_role, display_name)
    }

    pub fn assignable_roles(&self, role: Role) -> &[Role] {
        self.hierarchy.assignable_roles(role)
    }

    pub fn navigation(&self, role: Role) -> Vec<NavEntry> {
        filter_items(NAVIGATION, self.matrix, &self.routes, role)
    }

    pub fn decide(&self, guard: &PermissionGuard, role: Option<Role>) -> GuardDecision {
        guard.decide(self.matrix, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_free_functions() {
        let access = AccessControl::default();
        for role in Role::ALL {
            for (path, _) in access.routes().entries() {
                assert_eq!(
                    access.can_access_route(role, path),
                    crate::routes::can_access_route(role, path)
                );
            }
            assert_eq!(
                access.navigation(role),
                crate::navigation::filter_navigation(role, RouteTable::standard())
            );
        }
    }

    #[test]
    fn test_policy_is_applied() {
        let access = AccessControl::new(UnmappedRoutePolicy::Deny);
        assert_eq!(access.routes().policy(), UnmappedRoutePolicy::Deny);
        assert!(!access.can_access_route(Role::SuperAdmin, "/dashboard"));
    }

    #[test]
    fn test_validated_accepts_standard_tables() {
        assert!(AccessControl::validated(UnmappedRoutePolicy::Allow).is_ok());
    }
}
