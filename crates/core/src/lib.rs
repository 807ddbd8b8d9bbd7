//! # Site24x7 Core
//!
//! Port interfaces between the resource adapters and the HTTP client.
//!
//! This crate contains:
//! - `Endpoint<T>`: the CRUD capability every resource family exposes
//! - Read-only endpoint traits for the listing/snapshot families
//! - `Site24x7Client`: the façade with one accessor per endpoint
//! - `testing::MockClient` (feature `test-utils`): a programmable stand-in
//!
//! ## Architecture Principles
//! - Only depends on `site24x7-domain`
//! - No HTTP code; infra implements these traits

pub mod client;
pub mod endpoints;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::ports::Site24x7Client;
pub use endpoints::ports::{
    CurrentStatusEndpoint, Endpoint, LocationTemplateEndpoint, ThirdPartyIntegrationsEndpoint,
};
