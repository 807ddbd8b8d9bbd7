//! Third-party alert integrations
//!
//! All integrations share `service_id`, `name`, `selection_type` and the
//! monitor/tag scoping lists. `selection_type` is 0 for all monitors, 2 for
//! specific monitors and 3 for tagged monitors.

use serde::{Deserialize, Serialize};

use crate::impl_api_entity;
use crate::serde_helpers::flexible_int;
use crate::types::monitors::Header;

/// OpsGenie alert forwarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsgenieIntegration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub selection_type: i64,
    #[serde(default)]
    pub trouble_alert: bool,
    #[serde(default)]
    pub manual_resolve: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_tags_id: Vec<String>,
}

impl_api_entity!(OpsgenieIntegration, service_id, "OpsGenie integration");

/// Slack incoming-webhook integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackIntegration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub selection_type: i64,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_tags_id: Vec<String>,
}

impl_api_entity!(SlackIntegration, service_id, "Slack integration");

/// Generic outbound webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookIntegration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub timeout: i64,
    #[serde(default)]
    pub method: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub selection_type: i64,
    #[serde(default)]
    pub is_poller_webhook: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poller: Option<String>,
    #[serde(default)]
    pub send_incident_parameters: bool,
    #[serde(default)]
    pub send_custom_parameters: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_parameters: Option<String>,
    #[serde(default)]
    pub send_in_json_format: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(default)]
    pub trouble_alert: bool,
    #[serde(default)]
    pub critical_alert: bool,
    #[serde(default)]
    pub down_alert: bool,
    #[serde(default)]
    pub manual_resolve: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_tags_id: Vec<String>,
}

impl_api_entity!(WebhookIntegration, service_id, "webhook integration");

/// PagerDuty events integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerDutyIntegration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    pub name: String,
    pub service_key: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub selection_type: i64,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub trouble_alert: bool,
    #[serde(default)]
    pub critical_alert: bool,
    #[serde(default)]
    pub down_alert: bool,
    #[serde(default)]
    pub manual_resolve: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_tags_id: Vec<String>,
}

impl_api_entity!(PagerDutyIntegration, service_id, "PagerDuty integration");

/// ServiceNow incident integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNowIntegration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    pub name: String,
    pub instance_url: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub selection_type: i64,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub trouble_alert: bool,
    #[serde(default)]
    pub critical_alert: bool,
    #[serde(default)]
    pub manual_resolve: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_tags_id: Vec<String>,
}

impl_api_entity!(ServiceNowIntegration, service_id, "ServiceNow integration");

/// Entry of the read-only third-party integration listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyIntegration {
    pub service_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "flexible_int")]
    pub integration_type: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub service_status: i64,
}
