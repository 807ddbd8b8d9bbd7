//! Monitor families sharing `/monitors`

use site24x7_core::{Endpoint, Site24x7Client};
use site24x7_domain::{AmazonMonitor, RestApiMonitor, SslMonitor, WebsiteMonitor};

use super::shared::{
    actions, actions_schema, actions_value, content_check, content_check_schema, headers,
    headers_schema, headers_value, monitor_reference_attributes, set_content_check,
};
use crate::error::Result;
use crate::lifecycle::ResourceAdapter;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema, Validator};

/// Poll intervals in minutes accepted by the API
const CHECK_FREQUENCIES: &[i64] = &[1, 5, 10, 15, 20, 30, 60, 120, 180, 360, 720, 1440];

fn with_references(mut attributes: Vec<Attribute>) -> Schema {
    attributes.extend(monitor_reference_attributes());
    attributes.push(Attribute::object_list("action_ids", actions_schema()));
    Schema::new(attributes)
}

/// `check_frequency` is a string on the wire; validated as an integer here.
fn check_frequency_attribute() -> Attribute {
    Attribute::int("check_frequency").default_value(1).validate(Validator::IntInSlice(CHECK_FREQUENCIES))
}

fn check_frequency(data: &ResourceData) -> String {
    data.int("check_frequency").to_string()
}

fn set_check_frequency(data: &mut ResourceData, frequency: &str) {
    match frequency.trim().parse::<i64>() {
        Ok(minutes) => data.set("check_frequency", minutes),
        Err(_) => {
            data.remove("check_frequency");
        }
    }
}

/// `site24x7_website_monitor`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebsiteMonitorResource;

impl ResourceAdapter for WebsiteMonitorResource {
    type Entity = WebsiteMonitor;

    const TYPE_NAME: &'static str = "site24x7_website_monitor";

    fn schema(&self) -> Schema {
        with_references(vec![
            Attribute::string("display_name").required(),
            Attribute::string("website").required(),
            check_frequency_attribute(),
            Attribute::int("timeout").default_value(10).validate(Validator::IntBetween(1, 45)),
            Attribute::string("http_method").default_value("G"),
            Attribute::string("auth_user"),
            Attribute::string("auth_pass"),
            Attribute::map("matching_keyword", content_check_schema()),
            Attribute::map("unmatching_keyword", content_check_schema()),
            Attribute::map("match_regex", content_check_schema()),
            Attribute::bool("match_case").default_value(false),
            Attribute::string("user_agent"),
            Attribute::object_list("custom_headers", headers_schema()),
            Attribute::bool("use_name_server").default_value(false),
            Attribute::string("up_status_codes"),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<WebsiteMonitor> {
        client.website_monitors()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<WebsiteMonitor> {
        Ok(WebsiteMonitor {
            monitor_id: String::new(),
            display_name: data.string("display_name"),
            monitor_type: WebsiteMonitor::TYPE.to_string(),
            website: data.string("website"),
            check_frequency: check_frequency(data),
            timeout: data.int("timeout"),
            http_method: data.string("http_method"),
            auth_user: data.string("auth_user"),
            auth_pass: data.string("auth_pass"),
            matching_keyword: content_check(data, "matching_keyword"),
            unmatching_keyword: content_check(data, "unmatching_keyword"),
            match_regex: content_check(data, "match_regex"),
            match_case: data.bool("match_case"),
            user_agent: data.string("user_agent"),
            custom_headers: headers(data, "custom_headers"),
            use_name_server: data.bool("use_name_server"),
            up_status_codes: data.string("up_status_codes"),
            location_profile_id: data.string("location_profile_id"),
            notification_profile_id: data.string("notification_profile_id"),
            threshold_profile_id: data.string("threshold_profile_id"),
            monitor_groups: data.string_list("monitor_groups"),
            user_group_ids: data.string_list("user_group_ids"),
            tag_ids: data.string_list("tag_ids"),
            third_party_services: data.string_list("third_party_services"),
            action_ids: actions(data, "action_ids"),
        })
    }

    fn apply(&self, data: &mut ResourceData, monitor: &WebsiteMonitor) {
        data.set_string("display_name", &monitor.display_name);
        data.set_string("website", &monitor.website);
        set_check_frequency(data, &monitor.check_frequency);
        data.set("timeout", monitor.timeout);
        data.set_string("http_method", &monitor.http_method);
        data.set_string("auth_user", &monitor.auth_user);
        data.set_string("auth_pass", &monitor.auth_pass);
        set_content_check(data, "matching_keyword", monitor.matching_keyword.as_ref());
        set_content_check(data, "unmatching_keyword", monitor.unmatching_keyword.as_ref());
        set_content_check(data, "match_regex", monitor.match_regex.as_ref());
        data.set("match_case", monitor.match_case);
        data.set_string("user_agent", &monitor.user_agent);
        data.set_list("custom_headers", headers_value(&monitor.custom_headers));
        data.set("use_name_server", monitor.use_name_server);
        data.set_string("up_status_codes", &monitor.up_status_codes);
        data.set_string("location_profile_id", &monitor.location_profile_id);
        data.set_string("notification_profile_id", &monitor.notification_profile_id);
        data.set_string("threshold_profile_id", &monitor.threshold_profile_id);
        data.set_list("monitor_groups", monitor.monitor_groups.clone());
        data.set_list("user_group_ids", monitor.user_group_ids.clone());
        data.set_list("tag_ids", monitor.tag_ids.clone());
        data.set_list("third_party_services", monitor.third_party_services.clone());
        data.set_list("action_ids", actions_value(&monitor.action_ids));
    }
}

/// `site24x7_ssl_monitor`
#[derive(Debug, Clone, Copy, Default)]
pub struct SslMonitorResource;

impl ResourceAdapter for SslMonitorResource {
    type Entity = SslMonitor;

    const TYPE_NAME: &'static str = "site24x7_ssl_monitor";

    fn schema(&self) -> Schema {
        with_references(vec![
            Attribute::string("display_name").required(),
            Attribute::string("domain_name").required(),
            Attribute::string("protocol").default_value("HTTPS"),
            Attribute::int("port").default_value(443).validate(Validator::IntBetween(1, 65535)),
            Attribute::int("timeout").default_value(30).validate(Validator::IntBetween(1, 45)),
            Attribute::int("expire_days").default_value(30),
            Attribute::string("http_protocol_version").default_value("H1.1"),
            Attribute::bool("ignore_domain_mismatch").default_value(false),
            Attribute::bool("ignore_trust").default_value(false),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<SslMonitor> {
        client.ssl_monitors()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<SslMonitor> {
        Ok(SslMonitor {
            monitor_id: String::new(),
            display_name: data.string("display_name"),
            monitor_type: SslMonitor::TYPE.to_string(),
            domain_name: data.string("domain_name"),
            protocol: data.string("protocol"),
            port: data.int("port"),
            timeout: data.int("timeout"),
            expire_days: data.int("expire_days"),
            http_protocol_version: data.string("http_protocol_version"),
            ignore_domain_mismatch: data.bool("ignore_domain_mismatch"),
            ignore_trust: data.bool("ignore_trust"),
            location_profile_id: data.string("location_profile_id"),
            notification_profile_id: data.string("notification_profile_id"),
            threshold_profile_id: data.string("threshold_profile_id"),
            monitor_groups: data.string_list("monitor_groups"),
            user_group_ids: data.string_list("user_group_ids"),
            tag_ids: data.string_list("tag_ids"),
            third_party_services: data.string_list("third_party_services"),
            action_ids: actions(data, "action_ids"),
        })
    }

    fn apply(&self, data: &mut ResourceData, monitor: &SslMonitor) {
        data.set_string("display_name", &monitor.display_name);
        data.set_string("domain_name", &monitor.domain_name);
        data.set_string("protocol", &monitor.protocol);
        data.set("port", monitor.port);
        data.set("timeout", monitor.timeout);
        data.set("expire_days", monitor.expire_days);
        data.set_string("http_protocol_version", &monitor.http_protocol_version);
        data.set("ignore_domain_mismatch", monitor.ignore_domain_mismatch);
        data.set("ignore_trust", monitor.ignore_trust);
        data.set_string("location_profile_id", &monitor.location_profile_id);
        data.set_string("notification_profile_id", &monitor.notification_profile_id);
        data.set_string("threshold_profile_id", &monitor.threshold_profile_id);
        data.set_list("monitor_groups", monitor.monitor_groups.clone());
        data.set_list("user_group_ids", monitor.user_group_ids.clone());
        data.set_list("tag_ids", monitor.tag_ids.clone());
        data.set_list("third_party_services", monitor.third_party_services.clone());
        data.set_list("action_ids", actions_value(&monitor.action_ids));
    }
}

/// `site24x7_rest_api_monitor`
#[derive(Debug, Clone, Copy, Default)]
pub struct RestApiMonitorResource;

impl ResourceAdapter for RestApiMonitorResource {
    type Entity = RestApiMonitor;

    const TYPE_NAME: &'static str = "site24x7_rest_api_monitor";

    fn schema(&self) -> Schema {
        with_references(vec![
            Attribute::string("display_name").required(),
            Attribute::string("website").required(),
            check_frequency_attribute(),
            Attribute::int("timeout").default_value(10).validate(Validator::IntBetween(1, 45)),
            Attribute::string("http_method").default_value("G"),
            Attribute::string("request_content_type"),
            Attribute::string("request_param"),
            // J json, X xml, T text
            Attribute::string("response_content_type").default_value("T"),
            Attribute::string("auth_user"),
            Attribute::string("auth_pass"),
            Attribute::string("oauth2_provider"),
            Attribute::object_list("custom_headers", headers_schema()),
            Attribute::map("matching_keyword", content_check_schema()),
            Attribute::bool("json_schema_check").default_value(false),
            Attribute::bool("use_name_server").default_value(false),
            Attribute::string("up_status_codes"),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<RestApiMonitor> {
        client.rest_api_monitors()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<RestApiMonitor> {
        Ok(RestApiMonitor {
            monitor_id: String::new(),
            display_name: data.string("display_name"),
            monitor_type: RestApiMonitor::TYPE.to_string(),
            website: data.string("website"),
            check_frequency: check_frequency(data),
            timeout: data.int("timeout"),
            http_method: data.string("http_method"),
            request_content_type: data.string("request_content_type"),
            request_param: data.string("request_param"),
            response_content_type: data.string("response_content_type"),
            auth_user: data.string("auth_user"),
            auth_pass: data.string("auth_pass"),
            oauth2_provider: data.string("oauth2_provider"),
            custom_headers: headers(data, "custom_headers"),
            matching_keyword: content_check(data, "matching_keyword"),
            json_schema_check: data.bool("json_schema_check"),
            use_name_server: data.bool("use_name_server"),
            up_status_codes: data.string("up_status_codes"),
            location_profile_id: data.string("location_profile_id"),
            notification_profile_id: data.string("notification_profile_id"),
            threshold_profile_id: data.string("threshold_profile_id"),
            monitor_groups: data.string_list("monitor_groups"),
            user_group_ids: data.string_list("user_group_ids"),
            tag_ids: data.string_list("tag_ids"),
            third_party_services: data.string_list("third_party_services"),
            action_ids: actions(data, "action_ids"),
        })
    }

    fn apply(&self, data: &mut ResourceData, monitor: &RestApiMonitor) {
        data.set_string("display_name", &monitor.display_name);
        data.set_string("website", &monitor.website);
        set_check_frequency(data, &monitor.check_frequency);
        data.set("timeout", monitor.timeout);
        data.set_string("http_method", &monitor.http_method);
        data.set_string("request_content_type", &monitor.request_content_type);
        data.set_string("request_param", &monitor.request_param);
        data.set_string("response_content_type", &monitor.response_content_type);
        data.set_string("auth_user", &monitor.auth_user);
        data.set_string("auth_pass", &monitor.auth_pass);
        data.set_string("oauth2_provider", &monitor.oauth2_provider);
        data.set_list("custom_headers", headers_value(&monitor.custom_headers));
        set_content_check(data, "matching_keyword", monitor.matching_keyword.as_ref());
        data.set("json_schema_check", monitor.json_schema_check);
        data.set("use_name_server", monitor.use_name_server);
        data.set_string("up_status_codes", &monitor.up_status_codes);
        data.set_string("location_profile_id", &monitor.location_profile_id);
        data.set_string("notification_profile_id", &monitor.notification_profile_id);
        data.set_string("threshold_profile_id", &monitor.threshold_profile_id);
        data.set_list("monitor_groups", monitor.monitor_groups.clone());
        data.set_list("user_group_ids", monitor.user_group_ids.clone());
        data.set_list("tag_ids", monitor.tag_ids.clone());
        data.set_list("third_party_services", monitor.third_party_services.clone());
        data.set_list("action_ids", actions_value(&monitor.action_ids));
    }
}

/// `site24x7_amazon_monitor`
#[derive(Debug, Clone, Copy, Default)]
pub struct AmazonMonitorResource;

impl ResourceAdapter for AmazonMonitorResource {
    type Entity = AmazonMonitor;

    const TYPE_NAME: &'static str = "site24x7_amazon_monitor";

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("display_name").required(),
            Attribute::string("role_arn").required(),
            Attribute::string("aws_external_id"),
            // minutes between resource discovery runs
            Attribute::int("aws_discovery_frequency")
                .default_value(5)
                .validate(Validator::IntInSlice(&[5, 10, 15, 20, 30, 60, 360, 720, 1440])),
            Attribute::string_list("aws_discover_services"),
            Attribute::string("notification_profile_id"),
            Attribute::string_list("user_group_ids"),
            Attribute::string_list("tag_ids"),
            Attribute::string_list("third_party_services"),
        ])
    }

    fn endpoint<'a>(&self, client: &'a dyn Site24x7Client) -> &'a dyn Endpoint<AmazonMonitor> {
        client.amazon_monitors()
    }

    fn to_entity(&self, data: &ResourceData) -> Result<AmazonMonitor> {
        Ok(AmazonMonitor {
            monitor_id: String::new(),
            display_name: data.string("display_name"),
            monitor_type: AmazonMonitor::TYPE.to_string(),
            role_arn: data.string("role_arn"),
            aws_external_id: data.opt_string("aws_external_id"),
            aws_discovery_frequency: data.int("aws_discovery_frequency"),
            aws_discover_services: data.string_list("aws_discover_services"),
            notification_profile_id: data.string("notification_profile_id"),
            user_group_ids: data.string_list("user_group_ids"),
            tag_ids: data.string_list("tag_ids"),
            third_party_services: data.string_list("third_party_services"),
        })
    }

    fn apply(&self, data: &mut ResourceData, monitor: &AmazonMonitor) {
        data.set_string("display_name", &monitor.display_name);
        data.set_string("role_arn", &monitor.role_arn);
        data.set_opt("aws_external_id", monitor.aws_external_id.clone());
        data.set("aws_discovery_frequency", monitor.aws_discovery_frequency);
        data.set_list("aws_discover_services", monitor.aws_discover_services.clone());
        data.set_string("notification_profile_id", &monitor.notification_profile_id);
        data.set_list("user_group_ids", monitor.user_group_ids.clone());
        data.set_list("tag_ids", monitor.tag_ids.clone());
        data.set_list("third_party_services", monitor.third_party_services.clone());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use site24x7_core::testing::{EndpointCall, MockClient};
    use site24x7_domain::{ContentCheck, ErrorKind};

    use super::*;
    use crate::lifecycle;
    use crate::resources::test_support::assert_round_trip;

    #[test]
    fn website_monitor_round_trips() {
        assert_round_trip(
            &WebsiteMonitorResource,
            json!({
                "display_name": "home",
                "website": "https://example.com",
                "check_frequency": "5",
                "timeout": 15,
                "matching_keyword": {"severity": 2, "value": "Welcome"},
                "match_regex": {"severity": "3", "value": "^ok$"},
                "custom_headers": [{"name": "Accept", "value": "text/html"}],
                "location_profile_id": "LP1",
                "notification_profile_id": "NP1",
                "threshold_profile_id": "TP1",
                "monitor_groups": ["G1"],
                "user_group_ids": ["UG1"],
                "tag_ids": ["T1"],
                "action_ids": [{"action_id": "A1", "alert_type": 1}]
            }),
        );
    }

    #[test]
    fn unset_optional_attributes_stay_unset_in_state() {
        let config = json!({"display_name": "home", "website": "https://example.com"});
        assert_round_trip(&WebsiteMonitorResource, config.clone());
        assert_round_trip(&RestApiMonitorResource, config);
        assert_round_trip(&SslMonitorResource, json!({"display_name": "cert", "domain_name": "example.com"}));
        assert_round_trip(
            &AmazonMonitorResource,
            json!({"display_name": "aws", "role_arn": "arn:aws:iam::123456789012:role/site24x7"}),
        );
    }

    #[tokio::test]
    async fn read_drops_attributes_the_server_cleared() {
        let client = MockClient::new();
        client.website_monitors.add_get_response(Ok(WebsiteMonitor {
            monitor_id: "M1".to_string(),
            display_name: "home".to_string(),
            website: "https://example.com".to_string(),
            check_frequency: "1".to_string(),
            ..Default::default()
        }));

        let mut data = ResourceData::from_value(json!({
            "display_name": "home",
            "website": "https://example.com",
            "notification_profile_id": "NP1",
            "tag_ids": ["T1"],
            "custom_headers": [{"name": "Accept"}]
        }))
        .with_id("M1");
        lifecycle::read(&WebsiteMonitorResource, &client, &mut data).await.unwrap();

        assert!(data.get("notification_profile_id").is_none());
        assert!(data.get("tag_ids").is_none());
        assert!(data.get("custom_headers").is_none());
        assert!(data.get("auth_user").is_none());
    }

    #[test]
    fn website_defaults_follow_the_api() {
        let mut data = ResourceData::from_value(json!({"display_name": "home", "website": "https://example.com"}));
        WebsiteMonitorResource.schema().validate(data.values_mut()).unwrap();
        let monitor = WebsiteMonitorResource.to_entity(&data).unwrap();

        assert_eq!(monitor.monitor_type, "URL");
        assert_eq!(monitor.check_frequency, "1");
        assert_eq!(monitor.timeout, 10);
        assert_eq!(monitor.http_method, "G");
        assert_eq!(monitor.matching_keyword, None);
    }

    #[test]
    fn content_check_severity_is_limited_to_trouble_or_critical() {
        let mut data = ResourceData::from_value(json!({
            "display_name": "home",
            "website": "https://example.com",
            "unmatching_keyword": {"severity": 1, "value": "error"}
        }));
        let diagnostics = WebsiteMonitorResource.schema().validate(data.values_mut()).unwrap_err();

        assert_eq!(diagnostics[0].path, "unmatching_keyword.severity");
    }

    #[test]
    fn ssl_monitor_round_trips() {
        assert_round_trip(
            &SslMonitorResource,
            json!({
                "display_name": "cert",
                "domain_name": "example.com",
                "port": "8443",
                "expire_days": 14,
                "ignore_trust": true,
                "tag_ids": ["T1"]
            }),
        );
    }

    #[test]
    fn rest_api_monitor_round_trips() {
        assert_round_trip(
            &RestApiMonitorResource,
            json!({
                "display_name": "api",
                "website": "https://api.example.com/health",
                "http_method": "P",
                "request_content_type": "J",
                "request_param": "{\"ping\":true}",
                "response_content_type": "J",
                "custom_headers": [{"name": "X-Token", "value": "abc"}],
                "matching_keyword": {"severity": 3, "value": "ok"},
                "json_schema_check": true,
                "up_status_codes": "200,204"
            }),
        );
    }

    #[test]
    fn amazon_monitor_round_trips() {
        assert_round_trip(
            &AmazonMonitorResource,
            json!({
                "display_name": "aws",
                "role_arn": "arn:aws:iam::123456789012:role/site24x7",
                "aws_external_id": "ext-1",
                "aws_discovery_frequency": 60,
                "aws_discover_services": ["1", "3"],
                "user_group_ids": ["UG1"]
            }),
        );
    }

    #[tokio::test]
    async fn create_stamps_monitor_type() {
        let client = MockClient::new();
        client.ssl_monitors.add_create_response(Ok(SslMonitor {
            monitor_id: "M1".to_string(),
            ..Default::default()
        }));

        let mut data = ResourceData::from_value(json!({"display_name": "cert", "domain_name": "example.com"}));
        lifecycle::create(&SslMonitorResource, &client, &mut data).await.unwrap();

        let EndpointCall::Create(sent) = &client.ssl_monitors.calls()[0] else {
            panic!("expected a create call");
        };
        assert_eq!(sent.monitor_type, "SSL_CERT");
        assert_eq!(sent.port, 443);
        assert_eq!(data.id(), "M1");
    }

    #[tokio::test]
    async fn read_mirrors_server_state() {
        let client = MockClient::new();
        client.website_monitors.add_get_response(Ok(WebsiteMonitor {
            monitor_id: "M1".to_string(),
            display_name: "renamed".to_string(),
            monitor_type: WebsiteMonitor::TYPE.to_string(),
            website: "https://example.com".to_string(),
            check_frequency: "15".to_string(),
            matching_keyword: Some(ContentCheck { severity: 2, value: "hi".to_string() }),
            ..Default::default()
        }));

        let mut data =
            ResourceData::from_value(json!({"display_name": "home", "website": "https://example.com"})).with_id("M1");
        lifecycle::read(&WebsiteMonitorResource, &client, &mut data).await.unwrap();

        assert_eq!(data.string("display_name"), "renamed");
        assert_eq!(data.int("check_frequency"), 15);
        assert_eq!(data.object("matching_keyword").map(|check| check.len()), Some(2));
    }

    #[tokio::test]
    async fn invalid_frequency_is_rejected_before_any_call() {
        let client = MockClient::new();

        let mut data = ResourceData::from_value(json!({
            "display_name": "home",
            "website": "https://example.com",
            "check_frequency": 7
        }));
        let err = lifecycle::create(&WebsiteMonitorResource, &client, &mut data).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(client.total_calls(), 0);
    }
}
