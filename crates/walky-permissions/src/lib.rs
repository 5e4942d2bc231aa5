//! # Walky Permissions
//!
//! Role-based access control for the Walky Admin dashboard.
//!
//! This crate provides:
//!
//! - [`role`]: the five administrator roles and their display names
//! - [`resource`]: resources, actions, and [`ResourcePermission`] grants
//! - [`matrix`]: the static permission matrix and its evaluators
//! - [`hierarchy`]: which roles each role may assign to others
//! - [`routes`]: the route-to-resource map and route access checks
//! - [`navigation`]: the sidebar filtered per role
//! - [`guard`]: render decisions for permission-gated content
//! - [`access`]: the tables bundled with a configured route policy
//!
//! All tables are built once from literals and never mutated. Lookups never
//! fail: anything missing resolves to the most restrictive answer, except
//! unmapped routes, which follow the route table's policy (allow by default).
//!
//! # Example
//!
//! ```
//! use walky_permissions::{
//!     Action, Resource, Role, can_access_route, can_assign_role, has_permission,
//! };
//!
//! assert!(has_permission(Role::CampusAdmin, Resource::EventsManager, Action::Create));
//! assert!(can_assign_role(Role::CampusAdmin, Role::Moderator));
//! assert!(!can_access_route(Role::Moderator, "/students/active"));
//! ```

pub mod access;
pub mod error;
pub mod guard;
pub mod hierarchy;
pub mod matrix;
pub mod navigation;
pub mod resource;
pub mod role;
pub mod routes;

// Re-export commonly used types at crate root
pub use access::AccessControl;
pub use error::PermissionError;
pub use guard::{Fallback, GuardDecision, PermissionGuard};
pub use hierarchy::{
    RoleHierarchy, can_assign_role, can_assign_role_by_display_name, can_assign_role_str,
    get_assignable_role_display_names, get_assignable_roles,
};
pub use matrix::{
    PermissionMatrix, get_permissions, get_permissions_str, has_permission, has_permission_str,
};
pub use navigation::{NavEntry, filter_navigation};
pub use resource::{Action, Resource, ResourcePermission};
pub use role::{Role, display_name_to_role, role_display_name, role_display_names};
pub use routes::{RouteTable, UnmappedRoutePolicy, can_access_route, can_access_route_str};
