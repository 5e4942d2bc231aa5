use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use walky_permissions::{Action, Resource, ResourcePermission, Role, UnmappedRoutePolicy};

use crate::modules::ErrorResponse;
use crate::modules::auth::CurrentUser;
use crate::modules::navigation::NavigationResponse;
use crate::modules::pages::PageContext;
use crate::modules::permissions::{
    PermissionCheckResponse, PermissionMatrixResponse, RolePermissions,
};
use crate::modules::roles::{CanAssignRequest, CanAssignResponse, RoleInfo};
use crate::modules::routes::{RouteAccessResponse, RouteEntry, RouteTableResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::get_current_user,
        crate::modules::auth::controller::complete_login,
        crate::modules::permissions::controller::get_my_permissions,
        crate::modules::permissions::controller::check_permission,
        crate::modules::permissions::controller::get_permission_matrix,
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_assignable_roles,
        crate::modules::roles::controller::can_assign,
        crate::modules::routes::controller::get_routes,
        crate::modules::routes::controller::check_route_access,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::pages::controller::get_page_context,
    ),
    components(
        schemas(
            Role,
            Resource,
            Action,
            ResourcePermission,
            UnmappedRoutePolicy,
            CurrentUser,
            RolePermissions,
            PermissionMatrixResponse,
            PermissionCheckResponse,
            RoleInfo,
            CanAssignRequest,
            CanAssignResponse,
            RouteEntry,
            RouteTableResponse,
            RouteAccessResponse,
            NavigationResponse,
            PageContext,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Current session and login hand-off"),
        (name = "Permissions", description = "Permission matrix lookups"),
        (name = "Roles", description = "Roles and the assignment hierarchy"),
        (name = "Routes", description = "Dashboard route access"),
        (name = "Navigation", description = "Role-filtered sidebar"),
        (name = "Pages", description = "Guarded page shells")
    ),
    info(
        title = "Walky Admin API",
        version = "0.1.0",
        description = "Role-based access control for the Walky administration dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
