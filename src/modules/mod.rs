pub mod auth;
pub mod navigation;
pub mod pages;
pub mod permissions;
pub mod roles;
pub mod routes;

#[derive(utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
