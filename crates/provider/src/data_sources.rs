//! Read-only data sources

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use site24x7_core::Site24x7Client;
use site24x7_domain::{ApiError, CurrentStatusOptions, Location, ThirdPartyIntegration};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema};

/// A data source only supports `read`; its id is fixed.
#[async_trait]
pub trait DataSourceHandler: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn schema(&self) -> Schema;
    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()>;
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|err| ApiError::fatal(format!("failed to encode data source output: {err}")).into())
}

fn location_value(location: &Location) -> Value {
    json!({
        "location_id": location.location_id,
        "display_name": location.display_name,
        "city": location.city,
        "country": location.country,
        "city_short": location.city_short,
    })
}

/// `site24x7_location_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationTemplateSource;

#[async_trait]
impl DataSourceHandler for LocationTemplateSource {
    fn type_name(&self) -> &'static str {
        "site24x7_location_template"
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            // Narrows `locations` to the one with this display name
            Attribute::string("display_name"),
            Attribute::object_list("locations", Schema::default()).computed(),
        ])
    }

    #[instrument(skip_all, fields(data_source = "site24x7_location_template"))]
    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        let template = client.location_template().get().await?;

        let locations: Vec<Value> = match data.opt_string("display_name") {
            Some(name) => template.find_by_name(&name).map(location_value).into_iter().collect(),
            None => template.locations.iter().map(location_value).collect(),
        };
        debug!(count = locations.len(), "location template read");

        data.set("locations", locations);
        data.set_id("location_template");
        Ok(())
    }
}

/// `site24x7_current_status`
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentStatusSource;

#[async_trait]
impl DataSourceHandler for CurrentStatusSource {
    fn type_name(&self) -> &'static str {
        "site24x7_current_status"
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::bool("apm_required").default_value(false),
            Attribute::bool("group_required").default_value(false),
            Attribute::bool("locations_required").default_value(false),
            Attribute::bool("suspended_required").default_value(false),
            Attribute::object_list("monitors", Schema::default()).computed(),
            Attribute::object_list("monitor_groups", Schema::default()).computed(),
        ])
    }

    #[instrument(skip_all, fields(data_source = "site24x7_current_status"))]
    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        let options = CurrentStatusOptions {
            apm_required: data.bool("apm_required"),
            group_required: data.bool("group_required"),
            locations_required: data.bool("locations_required"),
            suspended_required: data.bool("suspended_required"),
        };
        let status = client.current_status().list(options).await?;
        debug!(monitors = status.monitors.len(), groups = status.monitor_groups.len(), "current status read");

        data.set("monitors", to_value(&status.monitors)?);
        data.set("monitor_groups", to_value(&status.monitor_groups)?);
        data.set_id("current_status");
        Ok(())
    }
}

fn integration_value(integration: &ThirdPartyIntegration) -> Value {
    json!({
        "service_id": integration.service_id,
        "name": integration.name,
        "type": integration.integration_type,
        "service_status": integration.service_status,
    })
}

/// `site24x7_third_party_integrations`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdPartyIntegrationsSource;

#[async_trait]
impl DataSourceHandler for ThirdPartyIntegrationsSource {
    fn type_name(&self) -> &'static str {
        "site24x7_third_party_integrations"
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            // Keep only integrations of this type code
            Attribute::int("type"),
            Attribute::object_list("integrations", Schema::default()).computed(),
        ])
    }

    #[instrument(skip_all, fields(data_source = "site24x7_third_party_integrations"))]
    async fn read(&self, client: &dyn Site24x7Client, data: &mut ResourceData) -> Result<()> {
        let wanted = data.opt_int("type");
        let integrations: Vec<Value> = client
            .third_party_integrations()
            .list()
            .await?
            .iter()
            .filter(|integration| wanted.map_or(true, |kind| integration.integration_type == kind))
            .map(integration_value)
            .collect();
        debug!(count = integrations.len(), "third-party integrations read");

        data.set("integrations", integrations);
        data.set_id("third_party_integrations");
        Ok(())
    }
}

/// Every data source, boxed for dispatch by name
pub fn all() -> Vec<Box<dyn DataSourceHandler>> {
    vec![
        Box::new(LocationTemplateSource),
        Box::new(CurrentStatusSource),
        Box::new(ThirdPartyIntegrationsSource),
    ]
}
