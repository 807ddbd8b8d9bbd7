//! Threshold profiles
//!
//! The API nests response time rules as `{"primary": [...], "secondary": [...]}`
//! with one record per severity. Configuration exposes them as four flat maps
//! instead, one per location and severity:
//!
//! ```text
//! primary_response_time_trouble_threshold   = { comparison_operator, strategy, value, polls_check }
//! primary_response_time_critical_threshold  = { ... }
//! secondary_response_time_trouble_threshold = { ... }
//! secondary_response_time_critical_threshold = { ... }
//! ```
//!
//! Severity is implied by the attribute name and stamped on write; on read
//! each server record is dispatched by its severity code.

use serde_json::{json, Map, Value};
use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::{
    ApiError, ContentChange, ResponseTimeThreshold, Severity, SeverityThreshold, ThresholdLocation,
    ThresholdProfile,
};

use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::{ObjectExt, ResourceData};
use crate::schema::{Attribute, Schema, Validator};

const COMPARISON_OPERATORS: &[i64] = &[1, 2, 3, 4, 5];
const STRATEGIES: &[i64] = &[1, 2, 3, 4];

/// Flat attribute name for one location and severity
fn threshold_attribute_name(location: ThresholdLocation, severity: Severity) -> &'static str {
    match (location, severity) {
        (ThresholdLocation::Primary, Severity::Trouble) => "primary_response_time_trouble_threshold",
        (ThresholdLocation::Primary, Severity::Critical) => "primary_response_time_critical_threshold",
        (ThresholdLocation::Secondary, Severity::Trouble) => "secondary_response_time_trouble_threshold",
        (ThresholdLocation::Secondary, Severity::Critical) => "secondary_response_time_critical_threshold",
    }
}

fn severity_threshold_schema(severity: Severity) -> Schema {
    let allowed: &'static [i64] = match severity {
        Severity::Trouble => &[2],
        Severity::Critical => &[3],
    };
    Schema::new(vec![
        Attribute::int("severity").validate(Validator::IntInSlice(allowed)),
        Attribute::int("comparison_operator").required().validate(Validator::IntInSlice(COMPARISON_OPERATORS)),
        Attribute::int("strategy").required().validate(Validator::IntInSlice(STRATEGIES)),
        Attribute::int("value").required(),
        Attribute::int("polls_check").required(),
    ])
}

fn content_change_schema() -> Schema {
    Schema::new(vec![
        Attribute::int("severity").required().validate(Validator::IntInSlice(super::shared::ALERT_SEVERITIES)),
        Attribute::int("comparison_operator").default_value(1).validate(Validator::IntInSlice(COMPARISON_OPERATORS)),
        Attribute::int("value").required().validate(Validator::IntBetween(0, 100)),
    ])
}

fn severity_threshold(map: &Map<String, Value>) -> SeverityThreshold {
    SeverityThreshold {
        severity: 0,
        comparison_operator: map.int_field("comparison_operator"),
        strategy: map.int_field("strategy"),
        value: map.int_field("value"),
        polls_check: map.int_field("polls_check"),
    }
}

/// Flat map for one record. `severity` is only written back when the tree
/// already carries it; the attribute name implies it otherwise.
fn severity_threshold_value(record: &SeverityThreshold, with_severity: bool) -> Value {
    let mut map = json!({
        "comparison_operator": record.comparison_operator,
        "strategy": record.strategy,
        "value": record.value,
        "polls_check": record.polls_check,
    });
    if with_severity {
        map["severity"] = record.severity.into();
    }
    map
}

fn response_time_threshold(data: &ResourceData) -> ResponseTimeThreshold {
    let mut thresholds = ResponseTimeThreshold::default();
    for location in ThresholdLocation::ALL {
        for severity in Severity::ALL {
            if let Some(map) = data.object(threshold_attribute_name(location, severity)) {
                thresholds.set(location, severity, severity_threshold(map));
            }
        }
    }
    thresholds
}

fn content_changes(data: &ResourceData) -> Result<Vec<ContentChange>> {
    data.object_list("website_content_changes")
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let code = item.int_field("severity");
            let severity = Severity::from_code(code).ok_or_else(|| {
                ApiError::validation(format!("unknown severity {code}"))
                    .with_field(format!("website_content_changes.{index}.severity"))
            })?;
            Ok(ContentChange {
                severity,
                comparison_operator: item.int_field("comparison_operator"),
                value: item.int_field("value"),
            })
        })
        .collect()
}

/// `site24x7_threshold_profile`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdProfileResource;

impl ResourceAdapter for ThresholdProfileResource {
    type Entity = ThresholdProfile;

    const TYPE_NAME: &'static str = "site24x7_threshold_profile";

    fn schema(&self) -> Schema {
        let mut attributes = vec![
            Attribute::string("profile_name").required(),
            Attribute::string("type").required(),
            Attribute::int("profile_type").default_value(1).validate(Validator::IntInSlice(&[1, 2])),
            Attribute::int("down_location_threshold").default_value(3).validate(Validator::IntBetween(0, 8)),
            Attribute::bool("website_content_modified").default_value(false),
            Attribute::object_list("website_content_changes", content_change_schema()),
        ];
        for location in ThresholdLocation::ALL {
            for severity in Severity::ALL {
                attributes.push(Attribute::map(
                    threshold_attribute_name(location, severity),
                    severity_threshold_schema(severity),
                ));
            }
        }
        Schema::new(attributes)
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<ThresholdProfile> {
        client.threshold_profiles()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<ThresholdProfile> {
        Ok(ThresholdProfile {
            profile_id: String::new(),
            profile_name: data.string("profile_name"),
            monitor_type: data.string("type"),
            profile_type: data.int("profile_type"),
            down_location_threshold: data.int("down_location_threshold"),
            website_content_modified: data.bool("website_content_modified"),
            website_content_changes: content_changes(data)?,
            response_time_threshold: response_time_threshold(data),
        })
    }

    fn apply(&self, data: &mut ResourceData, profile: &ThresholdProfile) {
        data.set_string("profile_name", &profile.profile_name);
        data.set_string("type", &profile.monitor_type);
        data.set("profile_type", profile.profile_type);
        data.set("down_location_threshold", profile.down_location_threshold);
        data.set("website_content_modified", profile.website_content_modified);

        let changes: Vec<Value> = profile
            .website_content_changes
            .iter()
            .map(|change| {
                json!({
                    "severity": change.severity.code(),
                    "comparison_operator": change.comparison_operator,
                    "value": change.value,
                })
            })
            .collect();
        data.set_list("website_content_changes", changes);

        for location in ThresholdLocation::ALL {
            for severity in Severity::ALL {
                let name = threshold_attribute_name(location, severity);
                let with_severity = data.object(name).is_some_and(|map| map.contains_key("severity"));
                let record = profile.response_time_threshold.get(location, severity);
                data.set_opt(name, record.map(|record| severity_threshold_value(record, with_severity)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use site24x7_core::testing::{EndpointCall, MockClient};
    use site24x7_domain::ErrorKind;

    use super::*;
    use crate::lifecycle;
    use crate::resources::test_support::assert_round_trip;

    fn server_profile(thresholds: Value) -> ThresholdProfile {
        serde_json::from_value(json!({
            "profile_id": "TP1",
            "profile_name": "web",
            "type": "URL",
            "response_time_threshold": thresholds
        }))
        .unwrap()
    }

    #[test]
    fn attribute_names_follow_location_and_severity() {
        for location in ThresholdLocation::ALL {
            for severity in Severity::ALL {
                let expected = format!("{}_response_time_{}_threshold", location.as_str(), severity.as_str());
                assert_eq!(threshold_attribute_name(location, severity), expected);
            }
        }
    }

    #[tokio::test]
    async fn read_dispatches_records_by_severity() {
        let client = MockClient::new();
        client.threshold_profiles.add_get_response(Ok(server_profile(json!({
            "primary": [
                {"severity": 2, "comparison_operator": 1, "strategy": 1, "value": 10000, "polls_check": 1},
                {"severity": 3, "comparison_operator": 1, "strategy": 1, "value": 20000, "polls_check": 5}
            ]
        }))));

        let mut data = ResourceData::from_value(json!({"profile_name": "web", "type": "URL"})).with_id("TP1");
        lifecycle::read(&ThresholdProfileResource, &client, &mut data).await.unwrap();

        let trouble = data.object("primary_response_time_trouble_threshold").unwrap();
        let critical = data.object("primary_response_time_critical_threshold").unwrap();
        assert_eq!(trouble.int_field("value"), 10000);
        assert_eq!(critical.int_field("value"), 20000);
        assert_eq!(critical.int_field("polls_check"), 5);
        assert!(data.get("secondary_response_time_trouble_threshold").is_none());
    }

    #[test]
    fn string_severities_from_the_server_are_dispatched() {
        let profile = server_profile(json!({
            "secondary": [
                {"severity": "3", "comparison_operator": "2", "strategy": 1, "value": "30000", "polls_check": 2}
            ]
        }));

        let mut data = ResourceData::default();
        ThresholdProfileResource.apply(&mut data, &profile);

        let critical = data.object("secondary_response_time_critical_threshold").unwrap();
        assert_eq!(critical.int_field("value"), 30000);
        assert_eq!(critical.int_field("comparison_operator"), 2);
        assert!(data.get("secondary_response_time_trouble_threshold").is_none());
    }

    #[tokio::test]
    async fn write_stamps_severity_and_orders_trouble_first() {
        let client = MockClient::new();
        client.threshold_profiles.add_create_response(Ok(server_profile(json!({}))));

        let mut data = ResourceData::from_value(json!({
            "profile_name": "web",
            "type": "URL",
            "primary_response_time_critical_threshold": {
                "comparison_operator": 1, "strategy": 1, "value": "20000", "polls_check": 5
            },
            "primary_response_time_trouble_threshold": {
                "comparison_operator": 1, "strategy": 1, "value": 10000, "polls_check": 1
            }
        }));
        lifecycle::create(&ThresholdProfileResource, &client, &mut data).await.unwrap();

        let EndpointCall::Create(sent) = &client.threshold_profiles.calls()[0] else {
            panic!("expected a create call");
        };
        let body = serde_json::to_value(sent).unwrap();
        assert_eq!(body["response_time_threshold"]["primary"][0]["severity"], json!(2));
        assert_eq!(body["response_time_threshold"]["primary"][1]["severity"], json!(3));
        assert_eq!(body["response_time_threshold"]["primary"][1]["value"], json!(20000));
        assert!(body["response_time_threshold"].get("secondary").is_none());
        assert_eq!(body["profile_type"], json!(1));
        assert_eq!(body["down_location_threshold"], json!(3));
        assert_eq!(data.id(), "TP1");
    }

    #[test]
    fn round_trips() {
        assert_round_trip(
            &ThresholdProfileResource,
            json!({
                "profile_name": "web",
                "type": "URL",
                "profile_type": 1,
                "down_location_threshold": 0,
                "website_content_modified": true,
                "website_content_changes": [
                    {"severity": 3, "value": 80},
                    {"severity": 2, "comparison_operator": 1, "value": 40}
                ],
                "primary_response_time_trouble_threshold": {
                    "comparison_operator": 1, "strategy": 2, "value": 10000, "polls_check": 1
                },
                "secondary_response_time_critical_threshold": {
                    "comparison_operator": 4, "strategy": 4, "value": "20000", "polls_check": 5
                }
            }),
        );
    }

    #[test]
    fn read_keeps_severity_key_only_where_configured() {
        let profile = server_profile(json!({
            "primary": [
                {"severity": 2, "comparison_operator": 1, "strategy": 1, "value": 10000, "polls_check": 1},
                {"severity": 3, "comparison_operator": 1, "strategy": 1, "value": 20000, "polls_check": 5}
            ]
        }));
        let mut data = ResourceData::from_value(json!({
            "profile_name": "web",
            "type": "URL",
            "primary_response_time_trouble_threshold": {
                "comparison_operator": 1, "strategy": 1, "value": 10000, "polls_check": 1
            },
            "primary_response_time_critical_threshold": {
                "severity": 3, "comparison_operator": 1, "strategy": 1, "value": 20000, "polls_check": 5
            }
        }));

        ThresholdProfileResource.apply(&mut data, &profile);

        assert_eq!(
            data.get("primary_response_time_trouble_threshold"),
            Some(&json!({"comparison_operator": 1, "strategy": 1, "value": 10000, "polls_check": 1}))
        );
        assert_eq!(
            data.get("primary_response_time_critical_threshold"),
            Some(&json!({"severity": 3, "comparison_operator": 1, "strategy": 1, "value": 20000, "polls_check": 5}))
        );
    }

    #[tokio::test]
    async fn boundary_violations_are_rejected_before_any_call() {
        let cases = [
            ("down_location_threshold", json!(9)),
            ("profile_type", json!(3)),
            ("website_content_changes", json!([{"severity": 2, "value": 101}])),
            ("website_content_changes", json!([{"severity": 1, "value": 10}])),
            (
                "primary_response_time_trouble_threshold",
                json!({"comparison_operator": 6, "strategy": 1, "value": 1, "polls_check": 1}),
            ),
            (
                "primary_response_time_trouble_threshold",
                json!({"comparison_operator": 1, "strategy": 5, "value": 1, "polls_check": 1}),
            ),
            (
                "secondary_response_time_critical_threshold",
                json!({"severity": 2, "comparison_operator": 1, "strategy": 1, "value": 1, "polls_check": 1}),
            ),
        ];

        for (key, value) in cases {
            let client = MockClient::new();
            let mut config = json!({"profile_name": "web", "type": "URL"});
            config[key] = value;

            let mut data = ResourceData::from_value(config);
            let err = lifecycle::create(&ThresholdProfileResource, &client, &mut data).await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Validation, "{key}");
            assert!(err.diagnostics()[0].path.starts_with(key), "{key}: {:?}", err.diagnostics());
            assert_eq!(client.total_calls(), 0);
        }
    }

    #[test]
    fn boundaries_themselves_are_accepted() {
        let mut data = ResourceData::from_value(json!({
            "profile_name": "web",
            "type": "URL",
            "down_location_threshold": 8,
            "website_content_changes": [{"severity": 2, "value": 100}, {"severity": 3, "value": 0}]
        }));

        ThresholdProfileResource.schema().validate(data.values_mut()).unwrap();
    }
}
