use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::MonitorGroup;

use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema, Validator};

/// `site24x7_monitor_group`
///
/// The host attribute `name` maps to the API's `display_name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorGroupResource;

impl ResourceAdapter for MonitorGroupResource {
    type Entity = MonitorGroup;

    const TYPE_NAME: &'static str = "site24x7_monitor_group";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("name").required(),
            Attribute::string("description"),
            Attribute::string_list("monitors"),
            Attribute::int("health_threshold_count").validate(Validator::IntBetween(0, 10)),
            Attribute::string_list("dependency_resource_ids"),
            Attribute::bool("suppress_alert"),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<MonitorGroup> {
        client.monitor_groups()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<MonitorGroup> {
        Ok(MonitorGroup {
            group_id: String::new(),
            display_name: data.string("name"),
            description: data.opt_string("description"),
            monitors: data.string_list("monitors"),
            health_threshold_count: data.opt_int("health_threshold_count"),
            dependency_resource_ids: data.string_list("dependency_resource_ids"),
            suppress_alert: data.opt_bool("suppress_alert"),
        })
    }

    fn apply(&self, data: &mut ResourceData, group: &MonitorGroup) {
        data.set_string("name", &group.display_name);
        data.set_opt("description", group.description.clone());
        data.set_list("monitors", group.monitors.clone());
        data.set_opt("health_threshold_count", group.health_threshold_count);
        data.set_list("dependency_resource_ids", group.dependency_resource_ids.clone());
        data.set_opt("suppress_alert", group.suppress_alert);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use site24x7_core::testing::{EndpointCall, MockClient};

    use super::*;
    use crate::lifecycle;
    use crate::resources::test_support::assert_round_trip;

    #[tokio::test]
    async fn create_sends_only_configured_fields() {
        let client = MockClient::new();
        client.monitor_groups.add_create_response(Ok(MonitorGroup {
            group_id: "123".to_string(),
            display_name: "g1".to_string(),
            monitors: vec!["m1".to_string(), "m2".to_string()],
            ..Default::default()
        }));

        let mut data = ResourceData::from_value(json!({"name": "g1", "monitors": ["m1", "m2"]}));
        lifecycle::create(&MonitorGroupResource, &client, &mut data).await.unwrap();

        assert_eq!(data.id(), "123");
        let EndpointCall::Create(sent) = &client.monitor_groups.calls()[0] else {
            panic!("expected a create call");
        };
        assert_eq!(
            serde_json::to_value(sent).unwrap(),
            json!({"display_name": "g1", "monitors": ["m1", "m2"]})
        );
    }

    #[test]
    fn round_trips() {
        assert_round_trip(
            &MonitorGroupResource,
            json!({
                "name": "web tier",
                "description": "all public sites",
                "monitors": ["m1", "m2"],
                "health_threshold_count": 1,
                "dependency_resource_ids": ["m0"],
                "suppress_alert": true
            }),
        );
    }
}
