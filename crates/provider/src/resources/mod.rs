//! Resource adapters, one per managed entity family

mod integrations;
mod monitor_group;
mod monitors;
mod profiles;
mod shared;
mod threshold_profile;
mod url_automation;

pub use integrations::{
    OpsgenieIntegrationResource, PagerDutyIntegrationResource, ServiceNowIntegrationResource,
    SlackIntegrationResource, WebhookIntegrationResource,
};
pub use monitor_group::MonitorGroupResource;
pub use monitors::{AmazonMonitorResource, RestApiMonitorResource, SslMonitorResource, WebsiteMonitorResource};
pub use profiles::{LocationProfileResource, NotificationProfileResource, TagResource, UserGroupResource};
pub use threshold_profile::ThresholdProfileResource;
pub use url_automation::UrlAutomationResource;

use crate::lifecycle::{Managed, ResourceHandler};

/// Every managed resource type, boxed for dispatch by name
pub fn all() -> Vec<Box<dyn ResourceHandler>> {
    vec![
        Box::new(Managed(MonitorGroupResource)),
        Box::new(Managed(WebsiteMonitorResource)),
        Box::new(Managed(SslMonitorResource)),
        Box::new(Managed(RestApiMonitorResource)),
        Box::new(Managed(AmazonMonitorResource)),
        Box::new(Managed(TagResource)),
        Box::new(Managed(LocationProfileResource)),
        Box::new(Managed(NotificationProfileResource)),
        Box::new(Managed(ThresholdProfileResource)),
        Box::new(Managed(UserGroupResource)),
        Box::new(Managed(UrlAutomationResource)),
        Box::new(Managed(OpsgenieIntegrationResource)),
        Box::new(Managed(SlackIntegrationResource)),
        Box::new(Managed(WebhookIntegrationResource)),
        Box::new(Managed(PagerDutyIntegrationResource)),
        Box::new(Managed(ServiceNowIntegrationResource)),
    ]
}
