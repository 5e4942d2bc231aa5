use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use walky_permissions::Role;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleInfo {
    pub role: Role,
    pub display_name: String,
    pub rank: u8,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            role,
            display_name: role.display_name().to_string(),
            rank: role.rank(),
        }
    }
}

/// Target of a prospective role assignment, by role name or by display name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_single_target"))]
pub struct CanAssignRequest {
    /// e.g. `moderator`
    pub target_role: Option<String>,
    /// e.g. `Moderator`
    pub target_display_name: Option<String>,
}

fn validate_single_target(request: &CanAssignRequest) -> Result<(), ValidationError> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    if present(&request.target_role) == present(&request.target_display_name) {
        return Err(ValidationError::new("single_target").with_message(Cow::Borrowed(
            "Exactly one of target_role or target_display_name is required",
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CanAssignResponse {
    /// `None` when the target did not name a known role
    pub target_role: Option<Role>,
    pub allowed: bool,
}
