use serde::Serialize;
use utoipa::ToSchema;
use walky_permissions::{NavEntry, Role};

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Role,
    /// Sidebar entries the role may open: `{ title, path?, children? }`
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<NavEntry>,
}
