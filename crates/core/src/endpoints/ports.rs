//! Port interfaces for Site24x7 endpoint clients
//!
//! Each resource family is served by one endpoint bound to a fixed path
//! prefix. Errors come back classified; callers decide what `NotFound` means.

use async_trait::async_trait;
use site24x7_domain::{
    ApiEntity, CurrentStatus, CurrentStatusOptions, LocationTemplate, Result,
    ThirdPartyIntegration,
};

/// CRUD operations for one resource family
#[async_trait]
pub trait Endpoint<T: ApiEntity>: Send + Sync {
    /// List every entity of the family (single page)
    async fn list(&self) -> Result<Vec<T>>;

    /// Fetch one entity; `NotFound` is propagated unchanged
    async fn get(&self, id: &str) -> Result<T>;

    /// Create an entity and return it with its server-assigned id
    async fn create(&self, entity: &T) -> Result<T>;

    /// Replace an entity with the full representation given.
    /// The entity's id must be set, otherwise a `Validation` error is returned.
    async fn update(&self, entity: &T) -> Result<T>;

    /// Delete an entity; `NotFound` is propagated unchanged
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Read-only catalogue of probe locations
#[async_trait]
pub trait LocationTemplateEndpoint: Send + Sync {
    async fn get(&self) -> Result<LocationTemplate>;
}

/// Read-only dashboard snapshot
#[async_trait]
pub trait CurrentStatusEndpoint: Send + Sync {
    async fn list(&self, options: CurrentStatusOptions) -> Result<CurrentStatus>;
}

/// Read-only listing of configured third-party integrations
#[async_trait]
pub trait ThirdPartyIntegrationsEndpoint: Send + Sync {
    async fn list(&self) -> Result<Vec<ThirdPartyIntegration>>;
}
