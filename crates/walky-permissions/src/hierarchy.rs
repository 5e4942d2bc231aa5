//! Role assignment hierarchy.
//!
//! Each role holds an ordered list of roles it may grant to other
//! administrators. The order is the order the dashboard renders them in.
//! The table is written out by hand; [`RoleHierarchy::validate`] checks it
//! against [`Role::rank`] so that no entry lets a role grant itself or
//! anything at or above its own rank.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::PermissionError;
use crate::role::Role;

static STANDARD_HIERARCHY: LazyLock<RoleHierarchy> = LazyLock::new(|| {
    RoleHierarchy::from_entries([
        (
            Role::SuperAdmin,
            vec![Role::SchoolAdmin, Role::CampusAdmin, Role::Moderator],
        ),
        (Role::SchoolAdmin, vec![Role::CampusAdmin, Role::Moderator]),
        (Role::CampusAdmin, vec![Role::Moderator]),
        (Role::Moderator, vec![]),
        (Role::WalkyInternal, vec![]),
    ])
});

#[derive(Debug, Clone, Default)]
pub struct RoleHierarchy {
    assignable: HashMap<Role, Vec<Role>>,
}

impl RoleHierarchy {
    pub fn standard() -> &'static RoleHierarchy {
        &STANDARD_HIERARCHY
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Role, Vec<Role>)>,
    {
        Self {
            assignable: entries.into_iter().collect(),
        }
    }

    /// Roles `role` may grant, in rendering order. Empty for roles without an entry.
    pub fn assignable_roles(&self, role: Role) -> &[Role] {
        self.assignable
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn can_assign(&self, user_role: Role, target_role: Role) -> bool {
        self.assignable_roles(user_role).contains(&target_role)
    }

    pub fn can_assign_by_display_name(&self, user_role: Role, display_name: &str) -> bool {
        match Role::from_display_name(display_name) {
            Some(target) => self.can_assign(user_role, target),
            None => {
                debug!(%user_role, display_name, "unrecognised role display name");
                false
            }
        }
    }

    pub fn assignable_display_names(&self, role: Role) -> Vec<&'static str> {
        self.assignable_roles(role)
            .iter()
            .map(Role::display_name)
            .collect()
    }

    /// Check that no role may assign itself and that every target ranks
    /// strictly below its assigner.
    pub fn validate(&self) -> Result<(), PermissionError> {
        for role in Role::ALL {
            for target in self.assignable_roles(role) {
                if *target == role {
                    return Err(PermissionError::SelfAssignment(role));
                }
                if target.rank() >= role.rank() {
                    return Err(PermissionError::Escalation {
                        assigner: role,
                        target: *target,
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn get_assignable_roles(role: Role) -> &'static [Role] {
    RoleHierarchy::standard().assignable_roles(role)
}

pub fn can_assign_role(user_role: Role, target_role: Role) -> bool {
    RoleHierarchy::standard().can_assign(user_role, target_role)
}

pub fn can_assign_role_by_display_name(user_role: Role, display_name: &str) -> bool {
    RoleHierarchy::standard().can_assign_by_display_name(user_role, display_name)
}

pub fn get_assignable_role_display_names(role: Role) -> Vec<&'static str> {
    RoleHierarchy::standard().assignable_display_names(role)
}

/// [`can_assign_role`] for raw strings. Unknown roles are never assignable.
pub fn can_assign_role_str(user_role: &str, target_role: &str) -> bool {
    match (user_role.parse::<Role>(), target_role.parse::<Role>()) {
        (Ok(user), Ok(target)) => can_assign_role(user, target),
        _ => false,
    }
}
