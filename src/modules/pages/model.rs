use serde::Serialize;
use utoipa::ToSchema;
use walky_permissions::{Action, Resource};

/// What a dashboard page shell needs to render for the current role.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageContext {
    pub path: String,
    /// `None` for pages outside the route table
    pub resource: Option<Resource>,
    /// Actions the role holds on `resource`, used to show or hide controls
    pub actions: Vec<Action>,
}
