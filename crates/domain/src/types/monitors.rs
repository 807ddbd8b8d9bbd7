//! Monitor families sharing the `/monitors` endpoint
//!
//! Each family is distinguished by its `type` field; listing through one
//! family's endpoint keeps only entries of that type.

use serde::{Deserialize, Serialize};

use crate::impl_api_entity;
use crate::serde_helpers::flexible_int;

/// HTTP header sent with each check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// IT automation triggered on a status change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    pub action_id: String,
    #[serde(deserialize_with = "flexible_int")]
    pub alert_type: i64,
}

/// Keyword / regex content check with the severity it raises
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCheck {
    #[serde(deserialize_with = "flexible_int")]
    pub severity: i64,
    pub value: String,
}

/// Website (HTTP) availability monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteMonitor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type", default = "website_type")]
    pub monitor_type: String,
    pub website: String,
    #[serde(default)]
    pub check_frequency: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub timeout: i64,
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub auth_user: String,
    #[serde(default)]
    pub auth_pass: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ContentCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ContentCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<ContentCheck>,
    #[serde(default)]
    pub match_case: bool,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(default)]
    pub use_name_server: bool,
    #[serde(default)]
    pub up_status_codes: String,
    #[serde(default)]
    pub location_profile_id: String,
    #[serde(default)]
    pub notification_profile_id: String,
    #[serde(default)]
    pub threshold_profile_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

fn website_type() -> String {
    WebsiteMonitor::TYPE.to_string()
}

impl WebsiteMonitor {
    pub const TYPE: &'static str = "URL";
}

impl_api_entity!(WebsiteMonitor, monitor_id, "website monitor", monitor_type = "URL");

/// SSL certificate expiry monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslMonitor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type", default = "ssl_type")]
    pub monitor_type: String,
    pub domain_name: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub port: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub timeout: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub expire_days: i64,
    #[serde(default)]
    pub http_protocol_version: String,
    #[serde(default)]
    pub ignore_domain_mismatch: bool,
    #[serde(default)]
    pub ignore_trust: bool,
    #[serde(default)]
    pub location_profile_id: String,
    #[serde(default)]
    pub notification_profile_id: String,
    #[serde(default)]
    pub threshold_profile_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

fn ssl_type() -> String {
    SslMonitor::TYPE.to_string()
}

impl SslMonitor {
    pub const TYPE: &'static str = "SSL_CERT";
}

impl_api_entity!(SslMonitor, monitor_id, "SSL monitor", monitor_type = "SSL_CERT");

/// REST API monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiMonitor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type", default = "rest_api_type")]
    pub monitor_type: String,
    pub website: String,
    #[serde(default)]
    pub check_frequency: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub timeout: i64,
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub request_content_type: String,
    #[serde(default)]
    pub request_param: String,
    #[serde(default)]
    pub response_content_type: String,
    #[serde(default)]
    pub auth_user: String,
    #[serde(default)]
    pub auth_pass: String,
    #[serde(default)]
    pub oauth2_provider: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ContentCheck>,
    #[serde(default)]
    pub json_schema_check: bool,
    #[serde(default)]
    pub use_name_server: bool,
    #[serde(default)]
    pub up_status_codes: String,
    #[serde(default)]
    pub location_profile_id: String,
    #[serde(default)]
    pub notification_profile_id: String,
    #[serde(default)]
    pub threshold_profile_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

fn rest_api_type() -> String {
    RestApiMonitor::TYPE.to_string()
}

impl RestApiMonitor {
    pub const TYPE: &'static str = "RESTAPI";
}

impl_api_entity!(RestApiMonitor, monitor_id, "REST API monitor", monitor_type = "RESTAPI");

/// AWS account monitor discovering resources through an IAM role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmazonMonitor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type", default = "amazon_type")]
    pub monitor_type: String,
    pub role_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_external_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub aws_discovery_frequency: i64,
    #[serde(default)]
    pub aws_discover_services: Vec<String>,
    #[serde(default)]
    pub notification_profile_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_services: Vec<String>,
}

fn amazon_type() -> String {
    AmazonMonitor::TYPE.to_string()
}

impl AmazonMonitor {
    pub const TYPE: &'static str = "AMAZON";
}

impl_api_entity!(AmazonMonitor, monitor_id, "Amazon monitor", monitor_type = "AMAZON");
