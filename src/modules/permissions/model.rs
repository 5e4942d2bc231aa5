use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use walky_permissions::{Action, Resource, ResourcePermission, Role};

#[derive(Debug, Serialize, ToSchema)]
pub struct RolePermissions {
    pub role: Role,
    /// Grant row per resource, keyed by resource name
    #[schema(value_type = Object)]
    pub permissions: BTreeMap<Resource, ResourcePermission>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionMatrixResponse {
    pub roles: Vec<RolePermissions>,
}

/// Raw query values; parsed and rejected in the handler so a typo is a `400`
/// rather than a silent deny.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PermissionCheckQuery {
    /// Resource name, e.g. `events_manager`
    pub resource: String,
    /// Action name; defaults to `read`
    pub action: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub role: Role,
    pub resource: Resource,
    pub action: Action,
    pub allowed: bool,
}
