//! Tags, location and notification profiles, user groups

use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::{LocationProfile, NotificationProfile, Tag, UserGroup};

use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema, Validator};

/// `site24x7_tag`
#[derive(Debug, Clone, Copy, Default)]
pub struct TagResource;

impl ResourceAdapter for TagResource {
    type Entity = Tag;

    const TYPE_NAME: &'static str = "site24x7_tag";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("tag_name").required(),
            Attribute::string("tag_value"),
            Attribute::string("tag_color"),
            Attribute::int("tag_type"),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<Tag> {
        client.tags()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<Tag> {
        Ok(Tag {
            tag_id: String::new(),
            tag_name: data.string("tag_name"),
            tag_value: data.string("tag_value"),
            tag_color: data.string("tag_color"),
            tag_type: data.opt_int("tag_type"),
        })
    }

    fn apply(&self, data: &mut ResourceData, tag: &Tag) {
        data.set_string("tag_name", &tag.tag_name);
        data.set_string("tag_value", &tag.tag_value);
        data.set_string("tag_color", &tag.tag_color);
        data.set_opt("tag_type", tag.tag_type);
    }
}

/// `site24x7_location_profile`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationProfileResource;

impl ResourceAdapter for LocationProfileResource {
    type Entity = LocationProfile;

    const TYPE_NAME: &'static str = "site24x7_location_profile";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("profile_name").required(),
            Attribute::string("primary_location").required(),
            Attribute::string_list("secondary_locations"),
            Attribute::bool("restrict_alt_loc").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<LocationProfile> {
        client.location_profiles()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<LocationProfile> {
        Ok(LocationProfile {
            profile_id: String::new(),
            profile_name: data.string("profile_name"),
            primary_location: data.string("primary_location"),
            secondary_locations: data.string_list("secondary_locations"),
            restrict_alt_loc: data.bool("restrict_alt_loc"),
        })
    }

    fn apply(&self, data: &mut ResourceData, profile: &LocationProfile) {
        data.set_string("profile_name", &profile.profile_name);
        data.set_string("primary_location", &profile.primary_location);
        data.set_list("secondary_locations", profile.secondary_locations.clone());
        data.set("restrict_alt_loc", profile.restrict_alt_loc);
    }
}

/// `site24x7_notification_profile`
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationProfileResource;

impl ResourceAdapter for NotificationProfileResource {
    type Entity = NotificationProfile;

    const TYPE_NAME: &'static str = "site24x7_notification_profile";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("profile_name").required(),
            Attribute::bool("rca_needed").default_value(true),
            Attribute::bool("notify_after_executing_actions").default_value(true),
            Attribute::int("downtime_notification_delay").validate(Validator::IntInSlice(&[1, 2, 3, 4, 5])),
            Attribute::int("persistent_notification"),
            Attribute::string("escalation_user_group_id"),
            Attribute::int("escalation_wait_time").default_value(0),
            Attribute::string_list("escalation_automations"),
            Attribute::string_list("escalation_services"),
            Attribute::int("template_id"),
            Attribute::bool("suppress_automation").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<NotificationProfile> {
        client.notification_profiles()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<NotificationProfile> {
        Ok(NotificationProfile {
            profile_id: String::new(),
            profile_name: data.string("profile_name"),
            rca_needed: data.bool("rca_needed"),
            notify_after_executing_actions: data.bool("notify_after_executing_actions"),
            downtime_notification_delay: data.opt_int("downtime_notification_delay"),
            persistent_notification: data.opt_int("persistent_notification"),
            escalation_user_group_id: data.opt_string("escalation_user_group_id"),
            escalation_wait_time: data.int("escalation_wait_time"),
            escalation_automations: data.string_list("escalation_automations"),
            escalation_services: data.string_list("escalation_services"),
            template_id: data.opt_int("template_id"),
            suppress_automation: data.bool("suppress_automation"),
        })
    }

    fn apply(&self, data: &mut ResourceData, profile: &NotificationProfile) {
        data.set_string("profile_name", &profile.profile_name);
        data.set("rca_needed", profile.rca_needed);
        data.set("notify_after_executing_actions", profile.notify_after_executing_actions);
        data.set_opt("downtime_notification_delay", profile.downtime_notification_delay);
        data.set_opt("persistent_notification", profile.persistent_notification);
        data.set_opt("escalation_user_group_id", profile.escalation_user_group_id.clone());
        data.set("escalation_wait_time", profile.escalation_wait_time);
        data.set_list("escalation_automations", profile.escalation_automations.clone());
        data.set_list("escalation_services", profile.escalation_services.clone());
        data.set_opt("template_id", profile.template_id);
        data.set("suppress_automation", profile.suppress_automation);
    }
}

/// `site24x7_user_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct UserGroupResource;

impl ResourceAdapter for UserGroupResource {
    type Entity = UserGroup;

    const TYPE_NAME: &'static str = "site24x7_user_group";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("display_name").required(),
            Attribute::string_list("users"),
            Attribute::string("attribute_group_id"),
            // 0 Site24x7, 1 APM Insight, 2 RUM, 3 AppLogs
            Attribute::int("product_id").default_value(0).validate(Validator::IntBetween(0, 3)),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<UserGroup> {
        client.user_groups()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<UserGroup> {
        Ok(UserGroup {
            user_group_id: String::new(),
            display_name: data.string("display_name"),
            users: data.string_list("users"),
            attribute_group_id: data.opt_string("attribute_group_id"),
            product_id: data.int("product_id"),
        })
    }

    fn apply(&self, data: &mut ResourceData, group: &UserGroup) {
        data.set_string("display_name", &group.display_name);
        data.set_list("users", group.users.clone());
        data.set_opt("attribute_group_id", group.attribute_group_id.clone());
        data.set("product_id", group.product_id);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use site24x7_core::testing::MockClient;
    use site24x7_domain::ApiError;

    use super::*;
    use crate::lifecycle;
    use crate::resources::test_support::assert_round_trip;

    #[test]
    fn tag_round_trips() {
        assert_round_trip(
            &TagResource,
            json!({"tag_name": "env", "tag_value": "prod", "tag_color": "#B7DA9E", "tag_type": 1}),
        );
    }

    #[test]
    fn location_profile_round_trips() {
        assert_round_trip(
            &LocationProfileResource,
            json!({
                "profile_name": "EU",
                "primary_location": "20",
                "secondary_locations": ["21", "22"],
                "restrict_alt_loc": true
            }),
        );
    }

    #[test]
    fn notification_profile_round_trips() {
        assert_round_trip(
            &NotificationProfileResource,
            json!({
                "profile_name": "on-call",
                "rca_needed": false,
                "downtime_notification_delay": 2,
                "persistent_notification": 5,
                "escalation_user_group_id": "UG1",
                "escalation_wait_time": 30,
                "escalation_automations": ["A1"],
                "escalation_services": ["S1"],
                "template_id": 7
            }),
        );
    }

    #[test]
    fn user_group_round_trips() {
        assert_round_trip(
            &UserGroupResource,
            json!({"display_name": "ops", "users": ["u1", "u2"], "attribute_group_id": "AG", "product_id": 0}),
        );
    }

    #[tokio::test]
    async fn deleting_missing_tag_succeeds() {
        let client = MockClient::new();
        client.tags.add_delete_response(Err(ApiError::not_found("Tag not found").with_status(404)));

        let mut data = ResourceData::from_value(json!({"tag_name": "env"})).with_id("abc");
        lifecycle::delete(&TagResource, &client, &mut data).await.unwrap();

        assert!(data.is_gone());
    }

    #[test]
    fn notification_defaults_are_applied() {
        let mut data = ResourceData::from_value(json!({"profile_name": "p"}));
        NotificationProfileResource.schema().validate(data.values_mut()).unwrap();
        let profile = NotificationProfileResource.to_entity(&data).unwrap();

        assert!(profile.rca_needed);
        assert!(profile.notify_after_executing_actions);
        assert!(!profile.suppress_automation);
        assert_eq!(profile.downtime_notification_delay, None);
    }
}
