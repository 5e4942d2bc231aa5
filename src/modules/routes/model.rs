use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use walky_permissions::{Resource, UnmappedRoutePolicy};

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteEntry {
    pub path: String,
    pub resource: Resource,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteTableResponse {
    /// Outcome for paths not listed in `routes`
    pub unmapped_policy: UnmappedRoutePolicy,
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteAccessQuery {
    /// Dashboard path, e.g. `/students/active`
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteAccessResponse {
    pub path: String,
    /// `None` for unmapped paths
    pub resource: Option<Resource>,
    pub allowed: bool,
}
