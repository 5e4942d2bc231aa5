use proptest::prelude::*;
use proptest::sample::select;
use walky_permissions::{
    Action, Resource, Role, can_access_route, can_access_route_str, can_assign_role,
    display_name_to_role, get_assignable_role_display_names, get_permissions, has_permission,
    has_permission_str, role_display_name, role_display_names,
};

fn any_role() -> impl Strategy<Value = Role> {
    select(Role::ALL.to_vec())
}

fn any_resource() -> impl Strategy<Value = Resource> {
    select(Resource::ALL.to_vec())
}

fn any_action() -> impl Strategy<Value = Action> {
    select(Action::ALL.to_vec())
}

fn unknown_role() -> impl Strategy<Value = String> {
    "[a-z_]{1,24}".prop_filter("must not be a real role", |s| s.parse::<Role>().is_err())
}

proptest! {
    #[test]
    fn every_pair_has_six_defined_actions(role in any_role(), resource in any_resource()) {
        let permission = get_permissions(role, resource);
        let value = serde_json::to_value(permission).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 6);
        for action in Action::ALL {
            prop_assert!(object[action.as_str()].is_boolean());
            prop_assert_eq!(object[action.as_str()].as_bool(), Some(permission.allows(action)));
        }
    }

    #[test]
    fn unknown_role_has_no_permissions(
        role in unknown_role(),
        resource in any_resource(),
        action in any_action(),
    ) {
        prop_assert!(!has_permission_str(&role, resource.as_str(), action.as_str()));
    }

    #[test]
    fn string_and_typed_lookups_agree(
        role in any_role(),
        resource in any_resource(),
        action in any_action(),
    ) {
        prop_assert_eq!(
            has_permission_str(role.as_str(), resource.as_str(), action.as_str()),
            has_permission(role, resource, action)
        );
    }

    #[test]
    fn assignment_never_escalates(assigner in any_role(), target in any_role()) {
        if can_assign_role(assigner, target) {
            prop_assert!(target.rank() < assigner.rank());
        }
    }

    #[test]
    fn unmapped_paths_are_open(role in any_role(), suffix in "[a-z0-9/-]{0,32}") {
        let path = format!("/this/path/does/not/exist{suffix}");
        prop_assert!(can_access_route(role, &path));
        prop_assert!(can_access_route_str("nonexistent_role", &path));
    }
}

#[test]
fn moderator_cannot_read_active_students() {
    assert!(!has_permission(
        Role::Moderator,
        Resource::ActiveStudents,
        Action::Read
    ));
    assert!(!has_permission_str("moderator", "active_students", "read"));
}

#[test]
fn super_admin_manages_roles() {
    assert!(has_permission(
        Role::SuperAdmin,
        Resource::RoleManagement,
        Action::Manage
    ));
    assert!(has_permission_str("super_admin", "role_management", "manage"));
}

#[test]
fn campus_admin_and_moderator_assignment_direction() {
    assert!(can_assign_role(Role::CampusAdmin, Role::Moderator));
    assert!(!can_assign_role(Role::Moderator, Role::CampusAdmin));
}

#[test]
fn walky_internal_can_open_unmapped_route() {
    assert!(can_access_route(
        Role::WalkyInternal,
        "/this/path/does/not/exist"
    ));
}

#[test]
fn super_admin_assignable_display_names_keep_order() {
    assert_eq!(
        get_assignable_role_display_names(Role::SuperAdmin),
        ["School Admin", "Campus Admin", "Moderator"]
    );
}

#[test]
fn display_names_round_trip() {
    for name in role_display_names() {
        let role = display_name_to_role(name).unwrap();
        assert_eq!(role_display_name(role), name);
    }
}
