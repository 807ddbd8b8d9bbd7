//! Third-party alert integrations

use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::{
    OpsgenieIntegration, PagerDutyIntegration, ServiceNowIntegration, SlackIntegration, WebhookIntegration,
};

use super::shared::{headers, headers_schema, headers_value, integration_scope_attributes};
use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema, Validator};

/// Which monitors raise alerts through an integration
struct Scope {
    selection_type: i64,
    monitors: Vec<String>,
    tags: Vec<String>,
    alert_tags_id: Vec<String>,
}

impl Scope {
    fn from_data(data: &ResourceData) -> Self {
        Self {
            selection_type: data.int("selection_type"),
            monitors: data.string_list("monitors"),
            tags: data.string_list("tags"),
            alert_tags_id: data.string_list("alert_tags_id"),
        }
    }
}

fn set_scope(
    data: &mut ResourceData,
    selection_type: i64,
    monitors: &[String],
    tags: &[String],
    alert_tags_id: &[String],
) {
    data.set("selection_type", selection_type);
    data.set_list("monitors", monitors.to_vec());
    data.set_list("tags", tags.to_vec());
    data.set_list("alert_tags_id", alert_tags_id.to_vec());
}

fn integration_schema(mut attributes: Vec<Attribute>) -> Schema {
    attributes.extend(integration_scope_attributes());
    Schema::new(attributes)
}

/// `site24x7_opsgenie_integration`
#[derive(Debug, Clone, Copy, Default)]
pub struct OpsgenieIntegrationResource;

impl ResourceAdapter for OpsgenieIntegrationResource {
    type Entity = OpsgenieIntegration;

    const TYPE_NAME: &'static str = "site24x7_opsgenie_integration";

    fn schema(&self) -> Schema {
        integration_schema(vec![
            Attribute::string("name").required(),
            Attribute::string("url").required(),
            Attribute::bool("trouble_alert").default_value(false),
            Attribute::bool("manual_resolve").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<OpsgenieIntegration> {
        client.opsgenie_integration()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<OpsgenieIntegration> {
        let scope = Scope::from_data(data);
        Ok(OpsgenieIntegration {
            service_id: String::new(),
            name: data.string("name"),
            url: data.string("url"),
            selection_type: scope.selection_type,
            trouble_alert: data.bool("trouble_alert"),
            manual_resolve: data.bool("manual_resolve"),
            monitors: scope.monitors,
            tags: scope.tags,
            alert_tags_id: scope.alert_tags_id,
        })
    }

    fn apply(&self, data: &mut ResourceData, integration: &OpsgenieIntegration) {
        data.set_string("name", &integration.name);
        data.set_string("url", &integration.url);
        data.set("trouble_alert", integration.trouble_alert);
        data.set("manual_resolve", integration.manual_resolve);
        set_scope(
            data,
            integration.selection_type,
            &integration.monitors,
            &integration.tags,
            &integration.alert_tags_id,
        );
    }
}

/// `site24x7_slack_integration`
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackIntegrationResource;

impl ResourceAdapter for SlackIntegrationResource {
    type Entity = SlackIntegration;

    const TYPE_NAME: &'static str = "site24x7_slack_integration";

    fn schema(&self) -> Schema {
        integration_schema(vec![
            Attribute::string("name").required(),
            Attribute::string("url").required(),
            Attribute::string("sender_name").required(),
            Attribute::string("title").required(),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<SlackIntegration> {
        client.slack_integration()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<SlackIntegration> {
        let scope = Scope::from_data(data);
        Ok(SlackIntegration {
            service_id: String::new(),
            name: data.string("name"),
            url: data.string("url"),
            selection_type: scope.selection_type,
            sender_name: data.string("sender_name"),
            title: data.string("title"),
            monitors: scope.monitors,
            tags: scope.tags,
            alert_tags_id: scope.alert_tags_id,
        })
    }

    fn apply(&self, data: &mut ResourceData, integration: &SlackIntegration) {
        data.set_string("name", &integration.name);
        data.set_string("url", &integration.url);
        data.set_string("sender_name", &integration.sender_name);
        data.set_string("title", &integration.title);
        set_scope(
            data,
            integration.selection_type,
            &integration.monitors,
            &integration.tags,
            &integration.alert_tags_id,
        );
    }
}

/// `site24x7_webhook_integration`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebhookIntegrationResource;

impl ResourceAdapter for WebhookIntegrationResource {
    type Entity = WebhookIntegration;

    const TYPE_NAME: &'static str = "site24x7_webhook_integration";

    fn schema(&self) -> Schema {
        integration_schema(vec![
            Attribute::string("name").required(),
            Attribute::string("url").required(),
            Attribute::int("timeout").default_value(30).validate(Validator::IntBetween(1, 45)),
            // G get, P post, U put, D delete
            Attribute::string("method").default_value("P"),
            Attribute::bool("is_poller_webhook").default_value(false),
            Attribute::string("poller"),
            Attribute::bool("send_incident_parameters").default_value(false),
            Attribute::bool("send_custom_parameters").default_value(false),
            Attribute::string("custom_parameters"),
            Attribute::bool("send_in_json_format").default_value(false),
            Attribute::string("auth_method"),
            Attribute::string("user_name"),
            Attribute::string("password"),
            Attribute::string("oauth2_provider"),
            Attribute::string("user_agent"),
            Attribute::object_list("custom_headers", headers_schema()),
            Attribute::bool("trouble_alert").default_value(false),
            Attribute::bool("critical_alert").default_value(false),
            Attribute::bool("down_alert").default_value(false),
            Attribute::bool("manual_resolve").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<WebhookIntegration> {
        client.webhook_integration()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<WebhookIntegration> {
        let scope = Scope::from_data(data);
        Ok(WebhookIntegration {
            service_id: String::new(),
            name: data.string("name"),
            url: data.string("url"),
            timeout: data.int("timeout"),
            method: data.string("method"),
            selection_type: scope.selection_type,
            is_poller_webhook: data.bool("is_poller_webhook"),
            poller: data.opt_string("poller"),
            send_incident_parameters: data.bool("send_incident_parameters"),
            send_custom_parameters: data.bool("send_custom_parameters"),
            custom_parameters: data.opt_string("custom_parameters"),
            send_in_json_format: data.bool("send_in_json_format"),
            auth_method: data.opt_string("auth_method"),
            user_name: data.opt_string("user_name"),
            password: data.opt_string("password"),
            oauth2_provider: data.opt_string("oauth2_provider"),
            user_agent: data.opt_string("user_agent"),
            custom_headers: headers(data, "custom_headers"),
            trouble_alert: data.bool("trouble_alert"),
            critical_alert: data.bool("critical_alert"),
            down_alert: data.bool("down_alert"),
            manual_resolve: data.bool("manual_resolve"),
            monitors: scope.monitors,
            tags: scope.tags,
            alert_tags_id: scope.alert_tags_id,
        })
    }

    fn apply(&self, data: &mut ResourceData, hook: &WebhookIntegration) {
        data.set_string("name", &hook.name);
        data.set_string("url", &hook.url);
        data.set("timeout", hook.timeout);
        data.set_string("method", &hook.method);
        data.set("is_poller_webhook", hook.is_poller_webhook);
        data.set_opt("poller", hook.poller.clone());
        data.set("send_incident_parameters", hook.send_incident_parameters);
        data.set("send_custom_parameters", hook.send_custom_parameters);
        data.set_opt("custom_parameters", hook.custom_parameters.clone());
        data.set("send_in_json_format", hook.send_in_json_format);
        data.set_opt("auth_method", hook.auth_method.clone());
        data.set_opt("user_name", hook.user_name.clone());
        // The API masks secrets on read; keep what was configured.
        if let Some(password) = &hook.password {
            data.set_string("password", &password);
        }
        data.set_opt("oauth2_provider", hook.oauth2_provider.clone());
        data.set_opt("user_agent", hook.user_agent.clone());
        data.set_list("custom_headers", headers_value(&hook.custom_headers));
        data.set("trouble_alert", hook.trouble_alert);
        data.set("critical_alert", hook.critical_alert);
        data.set("down_alert", hook.down_alert);
        data.set("manual_resolve", hook.manual_resolve);
        set_scope(data, hook.selection_type, &hook.monitors, &hook.tags, &hook.alert_tags_id);
    }
}

/// `site24x7_pagerduty_integration`
#[derive(Debug, Clone, Copy, Default)]
pub struct PagerDutyIntegrationResource;

impl ResourceAdapter for PagerDutyIntegrationResource {
    type Entity = PagerDutyIntegration;

    const TYPE_NAME: &'static str = "site24x7_pagerduty_integration";

    fn schema(&self) -> Schema {
        integration_schema(vec![
            Attribute::string("name").required(),
            Attribute::string("service_key").required(),
            Attribute::string("sender_name").required(),
            Attribute::string("title").required(),
            Attribute::bool("trouble_alert").default_value(false),
            Attribute::bool("critical_alert").default_value(false),
            Attribute::bool("down_alert").default_value(false),
            Attribute::bool("manual_resolve").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<PagerDutyIntegration> {
        client.pagerduty_integration()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<PagerDutyIntegration> {
        let scope = Scope::from_data(data);
        Ok(PagerDutyIntegration {
            service_id: String::new(),
            name: data.string("name"),
            service_key: data.string("service_key"),
            selection_type: scope.selection_type,
            sender_name: data.string("sender_name"),
            title: data.string("title"),
            trouble_alert: data.bool("trouble_alert"),
            critical_alert: data.bool("critical_alert"),
            down_alert: data.bool("down_alert"),
            manual_resolve: data.bool("manual_resolve"),
            monitors: scope.monitors,
            tags: scope.tags,
            alert_tags_id: scope.alert_tags_id,
        })
    }

    fn apply(&self, data: &mut ResourceData, integration: &PagerDutyIntegration) {
        data.set_string("name", &integration.name);
        data.set_string("service_key", &integration.service_key);
        data.set_string("sender_name", &integration.sender_name);
        data.set_string("title", &integration.title);
        data.set("trouble_alert", integration.trouble_alert);
        data.set("critical_alert", integration.critical_alert);
        data.set("down_alert", integration.down_alert);
        data.set("manual_resolve", integration.manual_resolve);
        set_scope(
            data,
            integration.selection_type,
            &integration.monitors,
            &integration.tags,
            &integration.alert_tags_id,
        );
    }
}

/// `site24x7_servicenow_integration`
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceNowIntegrationResource;

impl ResourceAdapter for ServiceNowIntegrationResource {
    type Entity = ServiceNowIntegration;

    const TYPE_NAME: &'static str = "site24x7_servicenow_integration";

    fn schema(&self) -> Schema {
        integration_schema(vec![
            Attribute::string("name").required(),
            Attribute::string("instance_url").required(),
            Attribute::string("sender_name").required(),
            Attribute::string("title").required(),
            Attribute::string("user_name").required(),
            Attribute::string("password").required(),
            Attribute::bool("trouble_alert").default_value(false),
            Attribute::bool("critical_alert").default_value(false),
            Attribute::bool("manual_resolve").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<ServiceNowIntegration> {
        client.servicenow_integration()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<ServiceNowIntegration> {
        let scope = Scope::from_data(data);
        Ok(ServiceNowIntegration {
            service_id: String::new(),
            name: data.string("name"),
            instance_url: data.string("instance_url"),
            selection_type: scope.selection_type,
            sender_name: data.string("sender_name"),
            title: data.string("title"),
            user_name: data.string("user_name"),
            password: data.string("password"),
            trouble_alert: data.bool("trouble_alert"),
            critical_alert: data.bool("critical_alert"),
            manual_resolve: data.bool("manual_resolve"),
            monitors: scope.monitors,
            tags: scope.tags,
            alert_tags_id: scope.alert_tags_id,
        })
    }

    fn apply(&self, data: &mut ResourceData, integration: &ServiceNowIntegration) {
        data.set_string("name", &integration.name);
        data.set_string("instance_url", &integration.instance_url);
        data.set_string("sender_name", &integration.sender_name);
        data.set_string("title", &integration.title);
        data.set_string("user_name", &integration.user_name);
        if !integration.password.is_empty() {
            data.set_string("password", &integration.password);
        }
        data.set("trouble_alert", integration.trouble_alert);
        data.set("critical_alert", integration.critical_alert);
        data.set("manual_resolve", integration.manual_resolve);
        set_scope(
            data,
            integration.selection_type,
            &integration.monitors,
            &integration.tags,
            &integration.alert_tags_id,
        );
    }
}
