//! Sidebar navigation and per-role filtering.

use serde::Serialize;

use crate::matrix::PermissionMatrix;
use crate::role::Role;
use crate::routes::RouteTable;

/// Static sidebar entry: a link (with `path`) or a group (with `children`).
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub title: &'static str,
    pub path: Option<&'static str>,
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn link(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path: Some(path),
            children: &[],
        }
    }

    const fn group(title: &'static str, children: &'static [NavItem]) -> Self {
        Self {
            title,
            path: None,
            children,
        }
    }
}

const ANALYTICS_LINKS: &[NavItem] = &[
    NavItem::link("Engagement", "/engagement-analytics"),
    NavItem::link("Popularity", "/popularity-analytics"),
    NavItem::link("User Interactions", "/user-interactions"),
    NavItem::link("Student Behavior", "/student-behavior"),
    NavItem::link("Student Safety", "/student-safety"),
];

const STUDENT_LINKS: &[NavItem] = &[
    NavItem::link("Active Students", "/students/active"),
    NavItem::link("Disengaged Students", "/students/disengaged"),
    NavItem::link("Deactivated Users", "/students/deactivated"),
    NavItem::link("Banned Users", "/students/banned"),
    NavItem::link("Flagged Users", "/students/flagged"),
    NavItem::link("Ambassadors", "/ambassadors"),
];

const CONTENT_LINKS: &[NavItem] = &[
    NavItem::link("Events", "/events"),
    NavItem::link("Spaces", "/spaces"),
    NavItem::link("Ideas", "/ideas"),
    NavItem::link("Reported Content", "/reported-content"),
];

const SETTINGS_LINKS: &[NavItem] = &[
    NavItem::link("Campus", "/settings/campus"),
    NavItem::link("School", "/settings/school"),
    NavItem::link("Roles", "/settings/roles"),
    NavItem::link("Admins", "/settings/admins"),
];

pub const NAVIGATION: &[NavItem] = &[
    NavItem::link("Dashboard", "/dashboard"),
    NavItem::group("Analytics", ANALYTICS_LINKS),
    NavItem::group("Manage Students", STUDENT_LINKS),
    NavItem::group("Content", CONTENT_LINKS),
    NavItem::group("Settings", SETTINGS_LINKS),
];

/// A sidebar entry visible to a particular role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

/// Filter `items` down to what `role` may open. Links are kept when the route
/// check allows their path; groups are kept when any child survives.
pub fn filter_items(
    items: &[NavItem],
    matrix: &PermissionMatrix,
    routes: &RouteTable,
    role: Role,
) -> Vec<NavEntry> {
    items
        .iter()
        .filter_map(|item| match item.path {
            Some(path) => routes.can_access(matrix, role, path).then(|| NavEntry {
                title: item.title.to_string(),
                path: Some(path.to_string()),
                children: Vec::new(),
            }),
            None => {
                let children = filter_items(item.children, matrix, routes, role);
                (!children.is_empty()).then(|| NavEntry {
                    title: item.title.to_string(),
                    path: None,
                    children,
                })
            }
        })
        .collect()
}

/// The standard sidebar filtered for `role`.
pub fn filter_navigation(role: Role, routes: &RouteTable) -> Vec<NavEntry> {
    filter_items(NAVIGATION, PermissionMatrix::standard(), routes, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::UnmappedRoutePolicy;

    fn titles(entries: &[NavEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_super_admin_sees_full_menu() {
        let menu = filter_navigation(Role::SuperAdmin, RouteTable::standard());
        assert_eq!(
            titles(&menu),
            vec!["Dashboard", "Analytics", "Manage Students", "Content", "Settings"]
        );
        assert_eq!(menu[2].children.len(), 6);
    }

    #[test]
    fn test_moderator_sees_dashboard_and_content() {
        let menu = filter_navigation(Role::Moderator, RouteTable::standard());
        assert_eq!(titles(&menu), vec!["Dashboard", "Content"]);
        assert_eq!(
            titles(&menu[1].children),
            vec!["Events", "Spaces", "Ideas", "Reported Content"]
        );
    }

    #[test]
    fn test_walky_internal_sees_only_unmapped_links() {
        let menu = filter_navigation(Role::WalkyInternal, RouteTable::standard());
        assert_eq!(titles(&menu), vec!["Dashboard"]);
    }

    #[test]
    fn test_deny_policy_hides_unmapped_links() {
        let routes = RouteTable::default().with_policy(UnmappedRoutePolicy::Deny);
        let menu = filter_navigation(Role::WalkyInternal, &routes);
        assert!(menu.is_empty());
    }

    #[test]
    fn test_campus_admin_settings_subset() {
        let menu = filter_navigation(Role::CampusAdmin, RouteTable::standard());
        let settings = menu.iter().find(|e| e.title == "Settings").unwrap();
        assert_eq!(titles(&settings.children), vec!["Campus", "Roles", "Admins"]);
    }

    #[test]
    fn test_every_link_is_in_route_table_or_dashboard() {
        let routes = RouteTable::standard();
        for group in NAVIGATION {
            for child in group.children {
                let path = child.path.unwrap();
                assert!(routes.resource_for(path).is_some(), "{path}");
            }
        }
    }
}
