//! Mock client façade

use site24x7_domain::{
    AmazonMonitor, LocationProfile, MonitorGroup, NotificationProfile, OpsgenieIntegration,
    PagerDutyIntegration, RestApiMonitor, ServiceNowIntegration, SlackIntegration, SslMonitor,
    Tag, ThresholdProfile, UrlAutomation, UserGroup, WebhookIntegration, WebsiteMonitor,
};

use super::mock_endpoint::{
    MockCurrentStatus, MockEndpoint, MockLocationTemplate, MockThirdPartyIntegrations,
};
use crate::client::ports::Site24x7Client;
use crate::endpoints::ports::{
    CurrentStatusEndpoint, Endpoint, LocationTemplateEndpoint, ThirdPartyIntegrationsEndpoint,
};

/// [`Site24x7Client`] whose endpoints are all programmable mocks.
///
/// # Examples
///
/// ```
/// use site24x7_core::testing::MockClient;
/// use site24x7_core::Site24x7Client;
/// use site24x7_domain::Tag;
///
/// let client = MockClient::new();
/// client.tags.add_delete_response(Ok(()));
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// runtime.block_on(client.tags().delete("abc")).unwrap();
/// assert_eq!(client.total_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockClient {
    pub current_status: MockCurrentStatus,
    pub location_template: MockLocationTemplate,
    pub third_party_integrations: MockThirdPartyIntegrations,
    pub monitor_groups: MockEndpoint<MonitorGroup>,
    pub website_monitors: MockEndpoint<WebsiteMonitor>,
    pub ssl_monitors: MockEndpoint<SslMonitor>,
    pub rest_api_monitors: MockEndpoint<RestApiMonitor>,
    pub amazon_monitors: MockEndpoint<AmazonMonitor>,
    pub tags: MockEndpoint<Tag>,
    pub location_profiles: MockEndpoint<LocationProfile>,
    pub notification_profiles: MockEndpoint<NotificationProfile>,
    pub threshold_profiles: MockEndpoint<ThresholdProfile>,
    pub user_groups: MockEndpoint<UserGroup>,
    pub url_automations: MockEndpoint<UrlAutomation>,
    pub opsgenie_integration: MockEndpoint<OpsgenieIntegration>,
    pub slack_integration: MockEndpoint<SlackIntegration>,
    pub webhook_integration: MockEndpoint<WebhookIntegration>,
    pub pagerduty_integration: MockEndpoint<PagerDutyIntegration>,
    pub servicenow_integration: MockEndpoint<ServiceNowIntegration>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls recorded across every endpoint
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.current_status.call_count()
            + self.location_template.call_count()
            + self.third_party_integrations.call_count()
            + self.monitor_groups.call_count()
            + self.website_monitors.call_count()
            + self.ssl_monitors.call_count()
            + self.rest_api_monitors.call_count()
            + self.amazon_monitors.call_count()
            + self.tags.call_count()
            + self.location_profiles.call_count()
            + self.notification_profiles.call_count()
            + self.threshold_profiles.call_count()
            + self.user_groups.call_count()
            + self.url_automations.call_count()
            + self.opsgenie_integration.call_count()
            + self.slack_integration.call_count()
            + self.webhook_integration.call_count()
            + self.pagerduty_integration.call_count()
            + self.servicenow_integration.call_count()
    }
}

impl Site24x7Client for MockClient {
    fn current_status(&self) -> &dyn CurrentStatusEndpoint {
        &self.current_status
    }

    fn location_template(&self) -> &dyn LocationTemplateEndpoint {
        &self.location_template
    }

    fn third_party_integrations(&self) -> &dyn ThirdPartyIntegrationsEndpoint {
        &self.third_party_integrations
    }

    fn monitor_groups(&self) -> &dyn Endpoint<MonitorGroup> {
        &self.monitor_groups
    }

    fn website_monitors(&self) -> &dyn Endpoint<WebsiteMonitor> {
        &self.website_monitors
    }

    fn ssl_monitors(&self) -> &dyn Endpoint<SslMonitor> {
        &self.ssl_monitors
    }

    fn rest_api_monitors(&self) -> &dyn Endpoint<RestApiMonitor> {
        &self.rest_api_monitors
    }

    fn amazon_monitors(&self) -> &dyn Endpoint<AmazonMonitor> {
        &self.amazon_monitors
    }

    fn tags(&self) -> &dyn Endpoint<Tag> {
        &self.tags
    }

    fn location_profiles(&self) -> &dyn Endpoint<LocationProfile> {
        &self.location_profiles
    }

    fn notification_profiles(&self) -> &dyn Endpoint<NotificationProfile> {
        &self.notification_profiles
    }

    fn threshold_profiles(&self) -> &dyn Endpoint<ThresholdProfile> {
        &self.threshold_profiles
    }

    fn user_groups(&self) -> &dyn Endpoint<UserGroup> {
        &self.user_groups
    }

    fn url_automations(&self) -> &dyn Endpoint<UrlAutomation> {
        &self.url_automations
    }

    fn opsgenie_integration(&self) -> &dyn Endpoint<OpsgenieIntegration> {
        &self.opsgenie_integration
    }

    fn slack_integration(&self) -> &dyn Endpoint<SlackIntegration> {
        &self.slack_integration
    }

    fn webhook_integration(&self) -> &dyn Endpoint<WebhookIntegration> {
        &self.webhook_integration
    }

    fn pagerduty_integration(&self) -> &dyn Endpoint<PagerDutyIntegration> {
        &self.pagerduty_integration
    }

    fn servicenow_integration(&self) -> &dyn Endpoint<ServiceNowIntegration> {
        &self.servicenow_integration
    }
}

#[cfg(test)]
mod tests {
    use site24x7_domain::ErrorKind;

    use super::*;

    #[tokio::test]
    async fn fresh_mock_answers_with_fatal() {
        let client = MockClient::new();

        let err = client.monitor_groups().list().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Fatal);
        let err = client.location_template().get().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Fatal);
        assert_eq!(client.total_calls(), 2);
    }

    #[tokio::test]
    async fn accessors_reach_the_public_fields() {
        let client = MockClient::new();
        client.threshold_profiles.add_delete_response(Ok(()));

        client.threshold_profiles().delete("p1").await.unwrap();
        assert_eq!(client.threshold_profiles.call_count(), 1);
        assert_eq!(client.tags.call_count(), 0);
    }
}
