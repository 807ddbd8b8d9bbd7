//! # Site24x7 Provider
//!
//! Resource lifecycle handlers for an infrastructure-as-code host.
//!
//! This crate contains:
//! - `schema`: declarative attribute schemas and validation diagnostics
//! - `resource_data`: the configuration/state tree of one resource instance
//! - `lifecycle`: the generic create/read/update/delete/exists flow
//! - `resources`: one adapter per entity family
//! - `data_sources`: read-only lookups
//! - `provider`: configuration and dispatch by type name
//!
//! ## Architecture Principles
//! - Adapters only convert shapes; every remote call goes through
//!   `site24x7-core` ports
//! - Configuration is validated before any HTTP call
//! - Only `NotFound` is interpreted (read, delete, exists); everything else
//!   surfaces unchanged

pub mod data_sources;
pub mod error;
pub mod lifecycle;
pub mod provider;
pub mod resource_data;
pub mod resources;
pub mod schema;

pub use data_sources::DataSourceHandler;
pub use error::{ProviderError, Result};
pub use lifecycle::{Managed, ResourceAdapter, ResourceHandler};
pub use provider::{Provider, DEFAULT_OPERATION_TIMEOUT};
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttrKind, Diagnostic, Schema, Validator};
