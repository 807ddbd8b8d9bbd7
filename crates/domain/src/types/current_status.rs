//! Read-only dashboard snapshot

use serde::{Deserialize, Serialize};

use crate::serde_helpers::flexible_int;

/// Query flags accepted by `GET /current_status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStatusOptions {
    #[serde(default)]
    pub apm_required: bool,
    #[serde(default)]
    pub group_required: bool,
    #[serde(default)]
    pub locations_required: bool,
    #[serde(default)]
    pub suspended_required: bool,
}

impl CurrentStatusOptions {
    /// Query string pairs for the flags that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("apm_required", self.apm_required),
            ("group_required", self.group_required),
            ("locations_required", self.locations_required),
            ("suspended_required", self.suspended_required),
        ]
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(key, _)| (key, "true".to_string()))
        .collect()
    }
}

/// Per-location status of a monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationStatus {
    #[serde(default)]
    pub location_name: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub status: i64,
    #[serde(default)]
    pub last_polled_time: String,
}

/// Current status of one monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorStatus {
    pub monitor_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monitor_type: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub status: i64,
    #[serde(default)]
    pub last_polled_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub locations: Vec<LocationStatus>,
}

/// Current status of a monitor group and its members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorGroupStatus {
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub status: i64,
    #[serde(default)]
    pub monitors: Vec<MonitorStatus>,
}

/// Snapshot returned by `GET /current_status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStatus {
    #[serde(default)]
    pub monitors: Vec<MonitorStatus>,
    #[serde(default)]
    pub monitor_groups: Vec<MonitorGroupStatus>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_pairs_only_include_enabled_flags() {
        let options = CurrentStatusOptions { group_required: true, suspended_required: true, ..Default::default() };
        assert_eq!(
            options.query_pairs(),
            vec![("group_required", "true".to_string()), ("suspended_required", "true".to_string())]
        );
        assert!(CurrentStatusOptions::default().query_pairs().is_empty());
    }

    #[test]
    fn decodes_snapshot_with_groups() {
        let status: CurrentStatus = serde_json::from_value(json!({
            "monitors": [{
                "monitor_id": "m1", "name": "site", "monitor_type": "URL", "status": 1,
                "last_polled_time": "2026-10-19T10:00:00+0000",
                "locations": [{"location_name": "London", "status": "1", "last_polled_time": "x"}]
            }],
            "monitor_groups": [{"group_id": "g1", "group_name": "web", "status": 0, "monitors": []}]
        }))
        .unwrap();

        assert_eq!(status.monitors[0].locations[0].status, 1);
        assert_eq!(status.monitor_groups[0].group_name, "web");
    }
}
