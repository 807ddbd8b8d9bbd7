//! Endpoint clients, one per resource family

pub mod paths;
mod readonly;
mod rest;

pub use readonly::{CurrentStatusClient, LocationTemplateClient, ThirdPartyIntegrationsClient};
pub use rest::RestEndpoint;
