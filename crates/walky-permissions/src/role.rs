//! Administrator roles.
//!
//! Roles are issued by the backend and carried in the session. They are parsed
//! into [`Role`] at the boundary so that an unknown value never reaches the
//! evaluators as a raw string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PermissionError;

/// Administrator role, as carried in the session token.
///
/// | Role | Display name | Rank |
/// |------|--------------|------|
/// | `super_admin` | Super Admin | 4 |
/// | `school_admin` | School Admin | 3 |
/// | `campus_admin` | Campus Admin | 2 |
/// | `moderator` | Moderator | 1 |
/// | `walky_internal` | Walky Internal | 0 |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    CampusAdmin,
    Moderator,
    WalkyInternal,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::SchoolAdmin,
        Role::CampusAdmin,
        Role::Moderator,
        Role::WalkyInternal,
    ];

    /// Wire name of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::SchoolAdmin => "school_admin",
            Role::CampusAdmin => "campus_admin",
            Role::Moderator => "moderator",
            Role::WalkyInternal => "walky_internal",
        }
    }

    /// Human-readable name shown in the dashboard.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::SchoolAdmin => "School Admin",
            Role::CampusAdmin => "Campus Admin",
            Role::Moderator => "Moderator",
            Role::WalkyInternal => "Walky Internal",
        }
    }

    /// Privilege rank, higher is more privileged.
    ///
    /// Only used to validate the assignment hierarchy; access decisions come
    /// from the permission matrix.
    pub const fn rank(&self) -> u8 {
        match self {
            Role::SuperAdmin => 4,
            Role::SchoolAdmin => 3,
            Role::CampusAdmin => 2,
            Role::Moderator => 1,
            Role::WalkyInternal => 0,
        }
    }

    /// Exact, case-sensitive match against [`Role::display_name`].
    pub fn from_display_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.display_name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PermissionError::UnknownRole(s.to_string()))
    }
}

/// Display name for a role.
pub const fn role_display_name(role: Role) -> &'static str {
    role.display_name()
}

/// Role behind a display name, `None` when the name is not recognised.
pub fn display_name_to_role(name: &str) -> Option<Role> {
    Role::from_display_name(name)
}

/// Every display name, in [`Role::ALL`] order.
pub fn role_display_names() -> impl Iterator<Item = &'static str> {
    Role::ALL.into_iter().map(|role| role.display_name())
}
