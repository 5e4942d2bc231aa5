//! # Walky Admin API
//!
//! The server side of the Walky administration dashboard. It decides, for a
//! signed-in administrator, which dashboard areas they may open, which actions
//! they may take there, and which roles they may hand out to others.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── walky-permissions/  # Roles, resources, matrix, hierarchy, routes, navigation, guards
//! ├── walky-auth/         # JWT claims and the session guard state
//! ├── walky-config/       # Environment configuration
//! ├── walky-core/         # AppError
//! └── walky-cli/          # Operator CLI
//! src/
//! ├── middleware/         # require_auth, require_route_access, enforce_permission
//! ├── modules/            # auth, permissions, roles, routes, navigation, pages
//! ├── docs.rs             # OpenAPI document
//! ├── logging.rs          # tracing setup and request logging
//! ├── metrics.rs          # Prometheus metrics
//! ├── router.rs           # Main application router
//! └── state.rs            # Shared application state
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: request and response types
//! - `router.rs`: Axum router configuration
//!
//! ## Roles
//!
//! | Role | Display name | Assigns |
//! |------|--------------|---------|
//! | `super_admin` | Super Admin | School Admin, Campus Admin, Moderator |
//! | `school_admin` | School Admin | Campus Admin, Moderator |
//! | `campus_admin` | Campus Admin | Moderator |
//! | `moderator` | Moderator | none |
//! | `walky_internal` | Walky Internal | none |
//!
//! Sessions are issued upstream; the token's `role` claim is the only input to
//! every decision. A token whose role is not one of the five is refused with
//! `403` at the boundary.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! UNMAPPED_ROUTE_POLICY=allow   # or deny
//! LOGIN_PATH=/login
//! UNAUTHORIZED_PATH=/unauthorized
//! SESSION_COOKIE=walky_session
//! PORT=3000
//! METRICS_PORT=9090
//! ```
//!
//! API documentation is served at `/scalar`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use walky_auth;
pub use walky_config;
pub use walky_core;
pub use walky_permissions;
