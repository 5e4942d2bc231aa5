use std::sync::Arc;

use walky_config::{AccessConfig, CorsConfig, JwtConfig};
use walky_permissions::{AccessControl, PermissionError};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub access_config: AccessConfig,
    pub access: Arc<AccessControl>,
}

impl AppState {
    /// Build state from already-loaded configuration. The role hierarchy is
    /// validated here so a bad table never reaches a request.
    pub fn new(
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        access_config: AccessConfig,
    ) -> Result<Self, PermissionError> {
        let access = AccessControl::validated(access_config.unmapped_route_policy)?;

        Ok(Self {
            jwt_config,
            cors_config,
            access_config,
            access: Arc::new(access),
        })
    }
}

pub fn init_app_state() -> Result<AppState, PermissionError> {
    AppState::new(
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        AccessConfig::from_env()?,
    )
}
