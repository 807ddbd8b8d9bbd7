//! Monitor groups

use serde::{Deserialize, Serialize};

use crate::impl_api_entity;

/// A named collection of monitors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_threshold_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_alert: Option<bool>,
}

impl_api_entity!(MonitorGroup, group_id, "monitor group");
