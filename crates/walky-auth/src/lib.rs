//! # Walky Auth
//!
//! Session tokens and authentication guard state for the Walky Admin API.
//!
//! This crate provides:
//!
//! - [`claims`]: Access token claims
//! - [`jwt`]: Token creation and verification utilities
//! - [`session`]: The `Loading → Authenticated | Unauthenticated` guard state
//!   and login redirect helpers
//!
//! The backend is the issuer of record for sessions. Token creation lives here
//! for the operator CLI and for tests.

pub mod claims;
pub mod jwt;
pub mod session;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, encode_claims, verify_token};
pub use session::{SessionState, UnauthenticatedReason, login_redirect, post_login_target};
