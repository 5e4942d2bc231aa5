//! Resources, actions, and per-resource grants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PermissionError;

/// A capability domain of the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    // Analytics
    EngagementAnalytics,
    PopularityAnalytics,
    UserInteractions,
    StudentBehavior,
    StudentSafety,
    // Manage students
    ActiveStudents,
    DisengagedStudents,
    DeactivatedUsers,
    BannedUsers,
    FlaggedUsers,
    Ambassadors,
    // Content
    EventsManager,
    SpacesManager,
    IdeasManager,
    ReportedContent,
    // Settings
    CampusSettings,
    SchoolSettings,
    RoleManagement,
    AdminUsers,
}

impl Resource {
    pub const ALL: [Resource; 19] = [
        Resource::EngagementAnalytics,
        Resource::PopularityAnalytics,
        Resource::UserInteractions,
        Resource::StudentBehavior,
        Resource::StudentSafety,
        Resource::ActiveStudents,
        Resource::DisengagedStudents,
        Resource::DeactivatedUsers,
        Resource::BannedUsers,
        Resource::FlaggedUsers,
        Resource::Ambassadors,
        Resource::EventsManager,
        Resource::SpacesManager,
        Resource::IdeasManager,
        Resource::ReportedContent,
        Resource::CampusSettings,
        Resource::SchoolSettings,
        Resource::RoleManagement,
        Resource::AdminUsers,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Resource::EngagementAnalytics => "engagement_analytics",
            Resource::PopularityAnalytics => "popularity_analytics",
            Resource::UserInteractions => "user_interactions",
            Resource::StudentBehavior => "student_behavior",
            Resource::StudentSafety => "student_safety",
            Resource::ActiveStudents => "active_students",
            Resource::DisengagedStudents => "disengaged_students",
            Resource::DeactivatedUsers => "deactivated_users",
            Resource::BannedUsers => "banned_users",
            Resource::FlaggedUsers => "flagged_users",
            Resource::Ambassadors => "ambassadors",
            Resource::EventsManager => "events_manager",
            Resource::SpacesManager => "spaces_manager",
            Resource::IdeasManager => "ideas_manager",
            Resource::ReportedContent => "reported_content",
            Resource::CampusSettings => "campus_settings",
            Resource::SchoolSettings => "school_settings",
            Resource::RoleManagement => "role_management",
            Resource::AdminUsers => "admin_users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| PermissionError::UnknownResource(s.to_string()))
    }
}

/// Operation on a resource.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Read,
    Create,
    Update,
    Delete,
    Export,
    Manage,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Export,
        Action::Manage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| PermissionError::UnknownAction(s.to_string()))
    }
}

/// What a role may do on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ResourcePermission {
    pub read: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub export: bool,
    pub manage: bool,
}

impl ResourcePermission {
    pub const NONE: ResourcePermission = ResourcePermission {
        read: false,
        create: false,
        update: false,
        delete: false,
        export: false,
        manage: false,
    };

    pub const ALL: ResourcePermission = ResourcePermission {
        read: true,
        create: true,
        update: true,
        delete: true,
        export: true,
        manage: true,
    };

    /// Grant exactly the listed actions.
    pub const fn grant(actions: &[Action]) -> ResourcePermission {
        let mut permission = ResourcePermission::NONE;
        let mut i = 0;
        while i < actions.len() {
            match actions[i] {
                Action::Read => permission.read = true,
                Action::Create => permission.create = true,
                Action::Update => permission.update = true,
                Action::Delete => permission.delete = true,
                Action::Export => permission.export = true,
                Action::Manage => permission.manage = true,
            }
            i += 1;
        }
        permission
    }

    pub const fn allows(&self, action: Action) -> bool {
        match action {
            Action::Read => self.read,
            Action::Create => self.create,
            Action::Update => self.update,
            Action::Delete => self.delete,
            Action::Export => self.export,
            Action::Manage => self.manage,
        }
    }

    /// Granted actions in [`Action::ALL`] order.
    pub fn granted_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.allows(*action))
            .collect()
    }

    pub fn is_none(&self) -> bool {
        *self == ResourcePermission::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_sets_only_listed_actions() {
        let permission = ResourcePermission::grant(&[Action::Read, Action::Export]);
        assert!(permission.read);
        assert!(permission.export);
        assert!(!permission.create);
        assert!(!permission.update);
        assert!(!permission.delete);
        assert!(!permission.manage);
    }

    #[test]
    fn test_grant_all_actions_equals_all() {
        assert_eq!(ResourcePermission::grant(&Action::ALL), ResourcePermission::ALL);
        assert_eq!(ResourcePermission::grant(&[]), ResourcePermission::NONE);
    }

    #[test]
    fn test_allows_matches_fields() {
        let permission = ResourcePermission::grant(&[Action::Update, Action::Manage]);
        for action in Action::ALL {
            let expected = matches!(action, Action::Update | Action::Manage);
            assert_eq!(permission.allows(action), expected, "{action}");
        }
    }

    #[test]
    fn test_granted_actions_order() {
        let permission = ResourcePermission::grant(&[Action::Manage, Action::Read, Action::Delete]);
        assert_eq!(
            permission.granted_actions(),
            vec![Action::Read, Action::Delete, Action::Manage]
        );
    }

    #[test]
    fn test_serializes_six_named_booleans() {
        let value = serde_json::to_value(ResourcePermission::NONE).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for action in Action::ALL {
            assert_eq!(object.get(action.as_str()), Some(&serde_json::Value::Bool(false)));
        }
    }

    #[test]
    fn test_parse_resource_and_action() {
        assert_eq!("active_students".parse::<Resource>(), Ok(Resource::ActiveStudents));
        assert_eq!("manage".parse::<Action>(), Ok(Action::Manage));
        assert!("students".parse::<Resource>().is_err());
        assert!("write".parse::<Action>().is_err());
    }

    #[test]
    fn test_resource_wire_names_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(resource.as_str().parse::<Resource>(), Ok(resource));
        }
    }
}
