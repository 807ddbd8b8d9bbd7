//! Provider entry point: configuration and dispatch by type name

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use site24x7_core::Site24x7Client;
use site24x7_infra::config::load_from_tree;
use site24x7_infra::{with_deadline, Site24x7ApiClient};
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::data_sources::{self, DataSourceHandler};
use crate::error::{ProviderError, Result};
use crate::lifecycle::ResourceHandler;
use crate::resource_data::ResourceData;
use crate::resources;
use crate::schema::Schema;

/// Deadline applied to each operation unless the host installs an earlier one
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// A configured provider.
///
/// Holds the shared API client and every resource and data source handler.
/// Each operation runs under its own deadline; a host that wraps the call in
/// [`with_deadline`] keeps whichever deadline comes first.
pub struct Provider {
    client: Arc<dyn Site24x7Client>,
    resources: HashMap<&'static str, Box<dyn ResourceHandler>>,
    data_sources: HashMap<&'static str, Box<dyn DataSourceHandler>>,
    operation_timeout: Duration,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.len())
            .field("data_sources", &self.data_sources.len())
            .field("operation_timeout", &self.operation_timeout)
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Build a provider from the host's provider block.
    ///
    /// Credentials missing from the block fall back to the environment.
    #[instrument(skip_all)]
    pub fn configure(block: &Map<String, Value>) -> Result<Self> {
        let config = load_from_tree(block)?;
        let client = Site24x7ApiClient::new(&config)?;
        info!(data_center = %config.data_center, "provider configured");
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Build a provider around an existing client.
    pub fn with_client(client: Arc<dyn Site24x7Client>) -> Self {
        let resources = resources::all().into_iter().map(|handler| (handler.type_name(), handler)).collect();
        let data_sources = data_sources::all().into_iter().map(|handler| (handler.type_name(), handler)).collect();
        Self { client, resources, data_sources, operation_timeout: DEFAULT_OPERATION_TIMEOUT }
    }

    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Registered resource type names, sorted
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered data source names, sorted
    pub fn data_source_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.data_sources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn resource_schema(&self, type_name: &str) -> Result<Schema> {
        Ok(self.resource(type_name)?.schema())
    }

    pub fn data_source_schema(&self, type_name: &str) -> Result<Schema> {
        Ok(self.data_source(type_name)?.schema())
    }

    pub async fn create(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let handler = self.resource(type_name)?;
        self.run(handler.create(self.client.as_ref(), data)).await
    }

    pub async fn read(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let handler = self.resource(type_name)?;
        self.run(handler.read(self.client.as_ref(), data)).await
    }

    pub async fn update(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let handler = self.resource(type_name)?;
        self.run(handler.update(self.client.as_ref(), data)).await
    }

    pub async fn delete(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let handler = self.resource(type_name)?;
        self.run(handler.delete(self.client.as_ref(), data)).await
    }

    pub async fn exists(&self, type_name: &str, data: &ResourceData) -> Result<bool> {
        let handler = self.resource(type_name)?;
        self.run(handler.exists(self.client.as_ref(), data)).await
    }

    /// Validate the data source arguments, then read it.
    pub async fn read_data_source(&self, type_name: &str, data: &mut ResourceData) -> Result<()> {
        let handler = self.data_source(type_name)?;
        handler
            .schema()
            .validate(data.values_mut())
            .map_err(|diagnostics| ProviderError::Schema { resource: handler.type_name(), diagnostics })?;
        self.run(handler.read(self.client.as_ref(), data)).await
    }

    fn resource(&self, type_name: &str) -> Result<&dyn ResourceHandler> {
        self.resources
            .get(type_name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DataSourceHandler> {
        self.data_sources
            .get(type_name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
    }

    async fn run<T>(&self, operation: impl Future<Output = Result<T>>) -> Result<T> {
        let deadline = Instant::now() + self.operation_timeout;
        with_deadline(deadline, async { Ok(operation.await) }).await?
    }
}
