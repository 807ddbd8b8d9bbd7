//! # Site24x7 Domain
//!
//! Entity model and error types for the Site24x7 provider.
//!
//! This crate contains:
//! - Entity records for every resource family, with their JSON field names
//! - The `ApiError` type and its `ErrorKind` classification
//! - Credential and provider configuration structures
//!
//! ## Architecture
//! - Depends only on `site24x7-common` for the classification trait
//! - No I/O; pure data structures and conversions

pub mod config;
pub mod errors;
pub mod macros;
pub mod serde_helpers;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
