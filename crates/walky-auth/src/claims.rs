//! Access token claims carrying the administrator's role.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use walky_permissions::{PermissionError, Role};

/// JWT claims for access tokens.
///
/// `role` stays a plain string on the wire so that a token minted with a role
/// this build does not know still decodes; [`Claims::role`] is where it is
/// parsed, and where an unknown value is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Role name as issued by the backend, e.g. `campus_admin`
    pub role: String,
    /// School scope (None for super admins and Walky staff)
    pub school_id: Option<Uuid>,
    /// Campus scope (None above campus level)
    pub campus_id: Option<Uuid>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn role(&self) -> Result<Role, PermissionError> {
        self.role.parse()
    }
}
