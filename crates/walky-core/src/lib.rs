//! # Walky Core
//!
//! Core types shared by the Walky Admin crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use walky_core::AppError;
//!
//! let error = AppError::forbidden("Role management requires manage access".to_string());
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
