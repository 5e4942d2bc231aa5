//! Guards applied to the dashboard API and page shells.
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor and the `require_auth` guard
//! - [`role`]: `require_route_access`, the role-protected page guard
//! - [`guard`]: `enforce_permission`, which applies a `PermissionGuard` to a router
//!
//! # Request flow
//!
//! 1. The token is read from `Authorization: Bearer <token>` or the session cookie
//! 2. `require_auth` resolves the session and parses the role, then stores the
//!    [`AuthUser`](auth::AuthUser) in the request extensions
//! 3. Route and permission guards evaluate the role against the static tables
//! 4. Handlers extract `AuthUser` without verifying the token again
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use walky_permissions::{PermissionGuard, Resource};
//!
//! let router = Router::new()
//!     .route("/matrix", get(get_matrix))
//!     .route_layer(middleware::from_fn_with_state(
//!         GuardState::new(state.clone(), PermissionGuard::new(Resource::RoleManagement)),
//!         enforce_permission,
//!     ));
//! ```

pub mod auth;
pub mod guard;
pub mod role;
