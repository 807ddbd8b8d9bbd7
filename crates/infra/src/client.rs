//! Production `Site24x7Client`

use std::sync::Arc;
use std::time::Duration;

use site24x7_common::RetryConfig;
use site24x7_core::{
    CurrentStatusEndpoint, Endpoint, LocationTemplateEndpoint, Site24x7Client,
    ThirdPartyIntegrationsEndpoint,
};
use site24x7_domain::{
    AmazonMonitor, ApiError, LocationProfile, MonitorGroup, NotificationProfile, OpsgenieIntegration,
    PagerDutyIntegration, ProviderConfig, Result, RestApiMonitor, RetrySettings, ServiceNowIntegration,
    SlackIntegration, SslMonitor, Tag, ThresholdProfile, UrlAutomation, UserGroup, WebhookIntegration,
    WebsiteMonitor,
};
use tracing::info;

use crate::auth::{AccessTokenProvider, OAuthTokenSource};
use crate::endpoints::{
    paths, CurrentStatusClient, LocationTemplateClient, RestEndpoint, ThirdPartyIntegrationsClient,
};
use crate::http::Transport;

const RETRY_JITTER: f64 = 0.25;

/// Client façade over one shared [`Transport`].
pub struct Site24x7ApiClient {
    transport: Arc<Transport>,
    current_status: CurrentStatusClient,
    location_template: LocationTemplateClient,
    third_party_integrations: ThirdPartyIntegrationsClient,
    monitor_groups: RestEndpoint<MonitorGroup>,
    website_monitors: RestEndpoint<WebsiteMonitor>,
    ssl_monitors: RestEndpoint<SslMonitor>,
    rest_api_monitors: RestEndpoint<RestApiMonitor>,
    amazon_monitors: RestEndpoint<AmazonMonitor>,
    tags: RestEndpoint<Tag>,
    location_profiles: RestEndpoint<LocationProfile>,
    notification_profiles: RestEndpoint<NotificationProfile>,
    threshold_profiles: RestEndpoint<ThresholdProfile>,
    user_groups: RestEndpoint<UserGroup>,
    url_automations: RestEndpoint<UrlAutomation>,
    opsgenie_integration: RestEndpoint<OpsgenieIntegration>,
    slack_integration: RestEndpoint<SlackIntegration>,
    webhook_integration: RestEndpoint<WebhookIntegration>,
    pagerduty_integration: RestEndpoint<PagerDutyIntegration>,
    servicenow_integration: RestEndpoint<ServiceNowIntegration>,
}

impl std::fmt::Debug for Site24x7ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site24x7ApiClient").field("transport", &self.transport).finish_non_exhaustive()
    }
}

impl Site24x7ApiClient {
    /// Build the token source and transport described by `config`.
    ///
    /// # Errors
    /// Returns a `Fatal` error when the configuration is incomplete or a base
    /// URL cannot be parsed. No network traffic happens here; the first token
    /// is minted lazily.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let tokens = OAuthTokenSource::builder(config.credentials.clone(), config.accounts_base_url())
            .timeout(config.request_timeout())
            .build()?;

        let transport = Transport::builder(config.api_base_url(), Arc::new(tokens) as Arc<dyn AccessTokenProvider>)
            .timeout(config.request_timeout())
            .retry(retry_config(&config.retry)?)
            .build()?;

        info!(data_center = %config.data_center, base_url = transport.base_url(), "Site24x7 client configured");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Wire every endpoint onto an existing transport.
    pub fn with_transport(transport: Arc<Transport>) -> Self {
        let t = || Arc::clone(&transport);
        Self {
            current_status: CurrentStatusClient::new(t()),
            location_template: LocationTemplateClient::new(t()),
            third_party_integrations: ThirdPartyIntegrationsClient::new(t()),
            monitor_groups: RestEndpoint::new(t(), paths::MONITOR_GROUPS),
            website_monitors: RestEndpoint::new(t(), paths::MONITORS),
            ssl_monitors: RestEndpoint::new(t(), paths::MONITORS),
            rest_api_monitors: RestEndpoint::new(t(), paths::MONITORS),
            amazon_monitors: RestEndpoint::new(t(), paths::MONITORS),
            tags: RestEndpoint::new(t(), paths::TAGS),
            location_profiles: RestEndpoint::new(t(), paths::LOCATION_PROFILES),
            notification_profiles: RestEndpoint::new(t(), paths::NOTIFICATION_PROFILES),
            threshold_profiles: RestEndpoint::new(t(), paths::THRESHOLD_PROFILES),
            user_groups: RestEndpoint::new(t(), paths::USER_GROUPS),
            url_automations: RestEndpoint::new(t(), paths::URL_AUTOMATIONS),
            opsgenie_integration: RestEndpoint::new(t(), paths::OPSGENIE),
            slack_integration: RestEndpoint::new(t(), paths::SLACK),
            webhook_integration: RestEndpoint::new(t(), paths::WEBHOOKS),
            pagerduty_integration: RestEndpoint::new(t(), paths::PAGER_DUTY),
            servicenow_integration: RestEndpoint::new(t(), paths::SERVICE_NOW),
            transport,
        }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }
}

/// Exponential backoff with ±25% jitter from the host-level knobs.
pub fn retry_config(settings: &RetrySettings) -> Result<RetryConfig> {
    RetryConfig::builder()
        .max_attempts(settings.max_attempts)
        .exponential_backoff(
            Duration::from_millis(settings.base_ms),
            2.0,
            Duration::from_millis(settings.max_ms),
        )
        .proportional_jitter(RETRY_JITTER)
        .build()
        .map_err(|err| ApiError::fatal(format!("invalid retry settings: {err}")))
}

impl Site24x7Client for Site24x7ApiClient {
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
