use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::UrlAutomation;

use super::shared::{headers, headers_schema, headers_value};
use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema, Validator};

/// `site24x7_url_action`
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAutomationResource;

impl ResourceAdapter for UrlAutomationResource {
    type Entity = UrlAutomation;

    const TYPE_NAME: &'static str = "site24x7_url_action";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("action_name").required(),
            Attribute::string("action_url").required(),
            // 2 is a URL invocation
            Attribute::int("action_type").default_value(2),
            Attribute::string("action_method").default_value("P"),
            Attribute::int("action_timeout").default_value(30).validate(Validator::IntBetween(1, 90)),
            Attribute::string("custom_parameters"),
            Attribute::bool("send_custom_parameters").default_value(false),
            Attribute::bool("send_in_json_format").default_value(false),
            Attribute::bool("send_email").default_value(false),
            Attribute::bool("send_incident_parameters").default_value(false),
            Attribute::string("auth_method"),
            Attribute::string("user_name"),
            Attribute::string("password"),
            Attribute::string("oauth2_provider"),
            Attribute::object_list("custom_headers", headers_schema()),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<UrlAutomation> {
        client.url_automations()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<UrlAutomation> {
        Ok(UrlAutomation {
            action_id: String::new(),
            action_name: data.string("action_name"),
            action_type: data.int("action_type"),
            action_method: data.string("action_method"),
            action_timeout: data.int("action_timeout"),
            action_url: data.string("action_url"),
            custom_parameters: data.opt_string("custom_parameters"),
            send_custom_parameters: data.bool("send_custom_parameters"),
            send_in_json_format: data.bool("send_in_json_format"),
            send_email: data.bool("send_email"),
            send_incident_parameters: data.bool("send_incident_parameters"),
            auth_method: data.opt_string("auth_method"),
            user_name: data.opt_string("user_name"),
            password: data.opt_string("password"),
            oauth2_provider: data.opt_string("oauth2_provider"),
            custom_headers: headers(data, "custom_headers"),
        })
    }

    fn apply(&self, data: &mut ResourceData, action: &UrlAutomation) {
        data.set_string("action_name", &action.action_name);
        data.set_string("action_url", &action.action_url);
        data.set("action_type", action.action_type);
        data.set_string("action_method", &action.action_method);
        data.set("action_timeout", action.action_timeout);
        data.set_opt("custom_parameters", action.custom_parameters.clone());
        data.set("send_custom_parameters", action.send_custom_parameters);
        data.set("send_in_json_format", action.send_in_json_format);
        data.set("send_email", action.send_email);
        data.set("send_incident_parameters", action.send_incident_parameters);
        data.set_opt("auth_method", action.auth_method.clone());
        data.set_opt("user_name", action.user_name.clone());
        // The API masks secrets on read; keep what was configured.
        if let Some(password) = &action.password {
            data.set_string("password", &password);
        }
        data.set_opt("oauth2_provider", action.oauth2_provider.clone());
        data.set_list("custom_headers", headers_value(&action.custom_headers));
    }
}
