//! Profiles and small named records referenced by monitors

use serde::{Deserialize, Serialize};

use crate::impl_api_entity;
use crate::serde_helpers::{flexible_int, flexible_int_opt};

/// Primary and fallback monitoring locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProfile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    pub primary_location: String,
    #[serde(default)]
    pub secondary_locations: Vec<String>,
    #[serde(default)]
    pub restrict_alt_loc: bool,
}

impl_api_entity!(LocationProfile, profile_id, "location profile");

/// One probe location from the location template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_short: Option<String>,
}

/// Read-only catalogue of probe locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTemplate {
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl LocationTemplate {
    /// Find a location by its display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.display_name.eq_ignore_ascii_case(name))
    }
}

/// How and when alerts are delivered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationProfile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    #[serde(default)]
    pub rca_needed: bool,
    #[serde(default)]
    pub notify_after_executing_actions: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_int_opt"
    )]
    pub downtime_notification_delay: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_int_opt"
    )]
    pub persistent_notification: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_user_group_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub escalation_wait_time: i64,
    #[serde(default)]
    pub escalation_automations: Vec<String>,
    #[serde(default)]
    pub escalation_services: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_int_opt"
    )]
    pub template_id: Option<i64>,
    #[serde(default)]
    pub suppress_automation: bool,
}

impl_api_entity!(NotificationProfile, profile_id, "notification profile");

/// Group of users alerted together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_group_id: String,
    pub display_name: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_group_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub product_id: i64,
}

impl_api_entity!(UserGroup, user_group_id, "user group");

/// Key/value label attachable to monitors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag_id: String,
    pub tag_name: String,
    #[serde(default)]
    pub tag_value: String,
    #[serde(default)]
    pub tag_color: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_int_opt"
    )]
    pub tag_type: Option<i64>,
}

impl_api_entity!(Tag, tag_id, "tag");
