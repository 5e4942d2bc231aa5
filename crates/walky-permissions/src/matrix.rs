//! The permission matrix and its evaluators.
//!
//! The matrix is a total function `Role × Resource → ResourcePermission`. Only
//! grants are stored; any pair without an entry resolves to
//! [`ResourcePermission::NONE`], so a lookup never fails.
//!
//! # Example
//!
//! ```
//! use walky_permissions::{Action, Resource, Role, has_permission};
//!
//! assert!(has_permission(Role::SuperAdmin, Resource::RoleManagement, Action::Manage));
//! assert!(!has_permission(Role::Moderator, Resource::ActiveStudents, Action::Read));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use tracing::debug;

use crate::resource::{Action, Resource, ResourcePermission};
use crate::role::Role;

static STANDARD_MATRIX: LazyLock<PermissionMatrix> =
    LazyLock::new(PermissionMatrix::build_standard);

const ANALYTICS: [Resource; 5] = [
    Resource::EngagementAnalytics,
    Resource::PopularityAnalytics,
    Resource::UserInteractions,
    Resource::StudentBehavior,
    Resource::StudentSafety,
];

const STUDENTS: [Resource; 5] = [
    Resource::ActiveStudents,
    Resource::DisengagedStudents,
    Resource::DeactivatedUsers,
    Resource::BannedUsers,
    Resource::FlaggedUsers,
];

const CONTENT: [Resource; 3] = [
    Resource::EventsManager,
    Resource::SpacesManager,
    Resource::IdeasManager,
];

const READ_EXPORT: ResourcePermission = ResourcePermission::grant(&[Action::Read, Action::Export]);
const CRUD: ResourcePermission = ResourcePermission::grant(&[
    Action::Read,
    Action::Create,
    Action::Update,
    Action::Delete,
]);
const CRUD_EXPORT: ResourcePermission = ResourcePermission::grant(&[
    Action::Read,
    Action::Create,
    Action::Update,
    Action::Delete,
    Action::Export,
]);
const MODERATE: ResourcePermission =
    ResourcePermission::grant(&[Action::Read, Action::Update, Action::Delete]);

/// Immutable grant table.
#[derive(Debug, Clone, Default)]
pub struct PermissionMatrix {
    grants: HashMap<(Role, Resource), ResourcePermission>,
}

impl PermissionMatrix {
    /// The process-wide matrix, built on first use.
    pub fn standard() -> &'static PermissionMatrix {
        &STANDARD_MATRIX
    }

    /// Build a matrix from explicit grants. A later entry for the same pair
    /// replaces an earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Role, Resource, ResourcePermission)>,
    {
        let grants = entries
            .into_iter()
            .map(|(role, resource, permission)| ((role, resource), permission))
            .collect();
        Self { grants }
    }

    fn build_standard() -> Self {
        let mut entries = Vec::new();

        for resource in Resource::ALL {
            entries.push((Role::SuperAdmin, resource, ResourcePermission::ALL));
        }

        let school_admin = Role::SchoolAdmin;
        entries.extend(ANALYTICS.map(|r| (school_admin, r, READ_EXPORT)));
        entries.extend(STUDENTS.map(|r| (school_admin, r, CRUD_EXPORT)));
        entries.extend(CONTENT.map(|r| (school_admin, r, CRUD_EXPORT)));
        entries.extend([
            (school_admin, Resource::Ambassadors, CRUD_EXPORT),
            (school_admin, Resource::ReportedContent, CRUD_EXPORT),
            (
                school_admin,
                Resource::CampusSettings,
                ResourcePermission::grant(&[
                    Action::Read,
                    Action::Create,
                    Action::Update,
                    Action::Delete,
                    Action::Manage,
                ]),
            ),
            (
                school_admin,
                Resource::SchoolSettings,
                ResourcePermission::grant(&[Action::Read, Action::Update]),
            ),
            (school_admin, Resource::RoleManagement, CRUD),
            (school_admin, Resource::AdminUsers, CRUD),
        ]);

        let campus_admin = Role::CampusAdmin;
        entries.extend(ANALYTICS.map(|r| (campus_admin, r, READ_EXPORT)));
        entries.extend(STUDENTS.map(|r| {
            (
                campus_admin,
                r,
                ResourcePermission::grant(&[Action::Read, Action::Update, Action::Export]),
            )
        }));
        entries.extend(CONTENT.map(|r| (campus_admin, r, CRUD_EXPORT)));
        entries.extend([
            (campus_admin, Resource::Ambassadors, CRUD),
            (campus_admin, Resource::ReportedContent, MODERATE),
            (
                campus_admin,
                Resource::CampusSettings,
                ResourcePermission::grant(&[Action::Read, Action::Update]),
            ),
            (
                campus_admin,
                Resource::RoleManagement,
                ResourcePermission::grant(&[Action::Read, Action::Create, Action::Update]),
            ),
            (
                campus_admin,
                Resource::AdminUsers,
                ResourcePermission::grant(&[Action::Read]),
            ),
        ]);

        entries.extend(CONTENT.map(|r| (Role::Moderator, r, MODERATE)));
        entries.push((Role::Moderator, Resource::ReportedContent, MODERATE));

        // walky_internal has no grants.

        Self::from_entries(entries)
    }

    pub fn permissions(&self, role: Role, resource: Resource) -> ResourcePermission {
        self.grants
            .get(&(role, resource))
            .copied()
            .unwrap_or(ResourcePermission::NONE)
    }

    pub fn has_permission(&self, role: Role, resource: Resource, action: Action) -> bool {
        self.permissions(role, resource).allows(action)
    }

    /// Every resource with the role's entry, in [`Resource::ALL`] order.
    pub fn role_permissions(&self, role: Role) -> BTreeMap<Resource, ResourcePermission> {
        Resource::ALL
            .into_iter()
            .map(|resource| (resource, self.permissions(role, resource)))
            .collect()
    }
}

/// Matrix entry for `role` on `resource` in the standard matrix.
pub fn get_permissions(role: Role, resource: Resource) -> ResourcePermission {
    PermissionMatrix::standard().permissions(role, resource)
}

pub fn has_permission(role: Role, resource: Resource, action: Action) -> bool {
    PermissionMatrix::standard().has_permission(role, resource, action)
}

/// [`get_permissions`] for raw strings. Unknown role or resource resolves to
/// [`ResourcePermission::NONE`].
pub fn get_permissions_str(role: &str, resource: &str) -> ResourcePermission {
    let (Ok(role), Ok(resource)) = (role.parse::<Role>(), resource.parse::<Resource>()) else {
        debug!(role, resource, "unrecognised role or resource, denying");
        return ResourcePermission::NONE;
    };
    get_permissions(role, resource)
}

/// [`has_permission`] for raw strings. Anything unrecognised is denied.
pub fn has_permission_str(role: &str, resource: &str, action: &str) -> bool {
    match action.parse::<Action>() {
        Ok(action) => get_permissions_str(role, resource).allows(action),
        Err(_) => {
            debug!(role, resource, action, "unrecognised action, denying");
            false
        }
    }
}
