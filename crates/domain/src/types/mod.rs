//! Entity records for every Site24x7 resource family
//!
//! Field names follow the API's JSON verbatim. Identifiers and optional
//! fields the API treats as "unset when absent" are skipped on write when
//! empty; everything else is always sent so that updates carry the full
//! representation.

pub mod current_status;
pub mod integrations;
pub mod monitor_group;
pub mod monitors;
pub mod profiles;
pub mod threshold_profile;
pub mod url_automation;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use current_status::{CurrentStatus, CurrentStatusOptions, LocationStatus, MonitorGroupStatus, MonitorStatus};
pub use integrations::{
    OpsgenieIntegration, PagerDutyIntegration, ServiceNowIntegration, SlackIntegration,
    ThirdPartyIntegration, WebhookIntegration,
};
pub use monitor_group::MonitorGroup;
pub use monitors::{
    ActionRef, AmazonMonitor, ContentCheck, Header, RestApiMonitor, SslMonitor, WebsiteMonitor,
};
pub use profiles::{Location, LocationProfile, LocationTemplate, NotificationProfile, Tag, UserGroup};
pub use threshold_profile::{
    ContentChange, ResponseTimeThreshold, Severity, SeverityThreshold, ThresholdLocation,
    ThresholdProfile,
};
pub use url_automation::UrlAutomation;

/// A record managed through a CRUD endpoint.
pub trait ApiEntity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human readable family name used in logs and error messages
    const RESOURCE: &'static str;

    /// Value of the `type` discriminator for families sharing `/monitors`
    const MONITOR_TYPE: Option<&'static str> = None;

    /// Server-assigned identifier; empty before creation
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// Every record's JSON envelope, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::flexible_int_opt")]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_info: Option<serde_json::Map<String, serde_json::Value>>,
}
