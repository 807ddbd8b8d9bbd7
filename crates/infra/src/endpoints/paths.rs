//! Path prefixes relative to the API base URL

pub const CURRENT_STATUS: &str = "current_status";
pub const MONITOR_GROUPS: &str = "monitor_groups";
pub const MONITORS: &str = "monitors";
pub const TAGS: &str = "tags";
pub const LOCATION_PROFILES: &str = "location_profiles";
pub const LOCATION_TEMPLATE: &str = "location_template";
pub const NOTIFICATION_PROFILES: &str = "notification_profiles";
pub const THRESHOLD_PROFILES: &str = "threshold_profiles";
pub const USER_GROUPS: &str = "user_groups";
pub const URL_AUTOMATIONS: &str = "url_automations";
pub const THIRD_PARTY_INTEGRATIONS: &str = "third_party_integrations";

pub const OPSGENIE: &str = "integration/opsgenie";
pub const SLACK: &str = "integration/slack";
pub const WEBHOOKS: &str = "integration/webhooks";
pub const PAGER_DUTY: &str = "integration/pager_duty";
pub const SERVICE_NOW: &str = "integration/service_now";
