//! The client façade: one accessor per endpoint client.

use site24x7_domain::{
    AmazonMonitor, LocationProfile, MonitorGroup, NotificationProfile, OpsgenieIntegration,
    PagerDutyIntegration, RestApiMonitor, ServiceNowIntegration, SlackIntegration, SslMonitor,
    Tag, ThresholdProfile, UrlAutomation, UserGroup, WebhookIntegration, WebsiteMonitor,
};

use crate::endpoints::ports::{
    CurrentStatusEndpoint, Endpoint, LocationTemplateEndpoint, ThirdPartyIntegrationsEndpoint,
};

/// Capability set shared by the production client and the test mock.
pub trait Site24x7Client: Send + Sync {
    fn current_status(&self) -> &dyn CurrentStatusEndpoint;
    fn location_template(&self) -> &dyn LocationTemplateEndpoint;
    fn third_party_integrations(&self) -> &dyn ThirdPartyIntegrationsEndpoint;

    fn monitor_groups(&self) -> &dyn Endpoint<MonitorGroup>;
    fn website_monitors(&self) -> &dyn Endpoint<WebsiteMonitor>;
    fn ssl_monitors(&self) -> &dyn Endpoint<SslMonitor>;
    fn rest_api_monitors(&self) -> &dyn Endpoint<RestApiMonitor>;
    fn amazon_monitors(&self) -> &dyn Endpoint<AmazonMonitor>;
    fn tags(&self) -> &dyn Endpoint<Tag>;
    fn location_profiles(&self) -> &dyn Endpoint<LocationProfile>;
    fn notification_profiles(&self) -> &dyn Endpoint<NotificationProfile>;
    fn threshold_profiles(&self) -> &dyn Endpoint<ThresholdProfile>;
    fn user_groups(&self) -> &dyn Endpoint<UserGroup>;
    fn url_automations(&self) -> &dyn Endpoint<UrlAutomation>;

    fn opsgenie_integration(&self) -> &dyn Endpoint<OpsgenieIntegration>;
    fn slack_integration(&self) -> &dyn Endpoint<SlackIntegration>;
    fn webhook_integration(&self) -> &dyn Endpoint<WebhookIntegration>;
    fn pagerduty_integration(&self) -> &dyn Endpoint<PagerDutyIntegration>;
    fn servicenow_integration(&self) -> &dyn Endpoint<ServiceNowIntegration>;
}
