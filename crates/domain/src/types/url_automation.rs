//! URL automations (IT automation actions invoking an HTTP endpoint)

use serde::{Deserialize, Serialize};

use crate::impl_api_entity;
use crate::serde_helpers::flexible_int;
use crate::types::monitors::Header;

/// HTTP call executed when a monitor changes status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAutomation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    pub action_name: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub action_type: i64,
    #[serde(default)]
    pub action_method: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub action_timeout: i64,
    pub action_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_parameters: Option<String>,
    #[serde(default)]
    pub send_custom_parameters: bool,
    #[serde(default)]
    pub send_in_json_format: bool,
    #[serde(default)]
    pub send_email: bool,
    #[serde(default)]
    pub send_incident_parameters: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
}

impl_api_entity!(UrlAutomation, action_id, "URL automation");
