//! # Walky Config
//!
//! Configuration types for Walky Admin, loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`access`]: route policy and guard redirect targets
//! - [`server`]: listen addresses for the API and metrics servers
//!
//! # Example
//!
//! ```ignore
//! use walky_config::{AccessConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let access_config = AccessConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! ```

pub mod access;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use access::AccessConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
