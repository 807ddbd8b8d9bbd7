//! Attribute blocks and conversions reused across families

use serde_json::{json, Map, Value};
use site24x7_domain::{ActionRef, ContentCheck, Header};

use crate::resource_data::{ObjectExt, ResourceData};
use crate::schema::{Attribute, Schema, Validator};

/// Trouble (2) or critical (3)
pub const ALERT_SEVERITIES: &[i64] = &[2, 3];

pub fn headers_schema() -> Schema {
    Schema::new(vec![Attribute::string("name").required(), Attribute::string("value")])
}

pub fn content_check_schema() -> Schema {
    Schema::new(vec![
        Attribute::int("severity").required().validate(Validator::IntInSlice(ALERT_SEVERITIES)),
        Attribute::string("value").required(),
    ])
}

pub fn actions_schema() -> Schema {
    Schema::new(vec![
        Attribute::string("action_id").required(),
        Attribute::int("alert_type").required(),
    ])
}

pub fn headers(data: &ResourceData, key: &str) -> Vec<Header> {
    data.object_list(key)
        .into_iter()
        .map(|item| Header { name: item.str_field("name"), value: item.str_field("value") })
        .collect()
}

/// Header objects; an empty value is left out like in configuration.
pub fn headers_value(headers: &[Header]) -> Vec<Value> {
    headers
        .iter()
        .map(|h| {
            let mut header = Map::new();
            header.insert("name".to_string(), h.name.as_str().into());
            if !h.value.is_empty() {
                header.insert("value".to_string(), h.value.as_str().into());
            }
            Value::Object(header)
        })
        .collect()
}

pub fn content_check(data: &ResourceData, key: &str) -> Option<ContentCheck> {
    data.object(key).map(|check| ContentCheck {
        severity: check.int_field("severity"),
        value: check.str_field("value"),
    })
}

pub fn set_content_check(data: &mut ResourceData, key: &str, check: Option<&ContentCheck>) {
    data.set_opt(key, check.map(|c| json!({"severity": c.severity, "value": c.value})));
}

pub fn actions(data: &ResourceData, key: &str) -> Vec<ActionRef> {
    data.object_list(key)
        .into_iter()
        .map(|item| ActionRef {
            action_id: item.str_field("action_id"),
            alert_type: item.int_field("alert_type"),
        })
        .collect()
}

pub fn actions_value(actions: &[ActionRef]) -> Vec<Value> {
    actions.iter().map(|a| json!({"action_id": a.action_id, "alert_type": a.alert_type})).collect()
}

/// Profile, group and alert-routing references common to monitors
pub fn monitor_reference_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("location_profile_id"),
        Attribute::string("notification_profile_id"),
        Attribute::string("threshold_profile_id"),
        Attribute::string_list("monitor_groups"),
        Attribute::string_list("user_group_ids"),
        Attribute::string_list("tag_ids"),
        Attribute::string_list("third_party_services"),
    ]
}

/// Monitor scoping common to alert integrations
pub fn integration_scope_attributes() -> Vec<Attribute> {
    vec![
        // 0 all monitors, 2 specific monitors, 3 tagged monitors
        Attribute::int("selection_type").default_value(0).validate(Validator::IntInSlice(&[0, 2, 3])),
        Attribute::string_list("monitors"),
        Attribute::string_list("tags"),
        Attribute::string_list("alert_tags_id"),
    ]
}
