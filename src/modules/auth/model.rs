use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use walky_permissions::Role;

/// The signed-in administrator, as the dashboard header shows it.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub role_display_name: String,
    pub school_id: Option<Uuid>,
    pub campus_id: Option<Uuid>,
    /// Token expiry (Unix timestamp); the session ends here
    pub expires_at: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginCompleteQuery {
    /// Location the login page was sent from, as carried by the login redirect
    pub redirect: Option<String>,
}
