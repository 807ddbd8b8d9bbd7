//! Read-only endpoint clients

use std::sync::Arc;

use async_trait::async_trait;
use site24x7_core::{CurrentStatusEndpoint, LocationTemplateEndpoint, ThirdPartyIntegrationsEndpoint};
use site24x7_domain::{
    ApiError, CurrentStatus, CurrentStatusOptions, LocationTemplate, Result, ThirdPartyIntegration,
};
use tracing::instrument;

use super::paths;
use crate::http::Transport;

/// `GET /location_template`
#[derive(Clone)]
pub struct LocationTemplateClient {
    transport: Arc<Transport>,
}

impl LocationTemplateClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl LocationTemplateEndpoint for LocationTemplateClient {
    #[instrument(skip(self))]
    async fn get(&self) -> Result<LocationTemplate> {
        self.transport.get(paths::LOCATION_TEMPLATE).await
    }
}

/// `GET /current_status` with the optional inclusion flags
#[derive(Clone)]
pub struct CurrentStatusClient {
    transport: Arc<Transport>,
}

impl CurrentStatusClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl CurrentStatusEndpoint for CurrentStatusClient {
    #[instrument(skip(self))]
    async fn list(&self, options: CurrentStatusOptions) -> Result<CurrentStatus> {
        let query = options.query_pairs();
        let data = self
            .transport
            .get_with_query::<serde_json::Value>(paths::CURRENT_STATUS, &query)
            .await?;
        if data.is_null() {
            return Ok(CurrentStatus::default());
        }
        serde_json::from_value(data).map_err(|err| {
            ApiError::fatal(format!("failed to decode current status: {err}"))
        })
    }
}

/// `GET /third_party_integrations`
#[derive(Clone)]
pub struct ThirdPartyIntegrationsClient {
    transport: Arc<Transport>,
}

impl ThirdPartyIntegrationsClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ThirdPartyIntegrationsEndpoint for ThirdPartyIntegrationsClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<ThirdPartyIntegration>> {
        let data = self.transport.get::<Option<Vec<ThirdPartyIntegration>>>(paths::THIRD_PARTY_INTEGRATIONS).await?;
        Ok(data.unwrap_or_default())
    }
}
