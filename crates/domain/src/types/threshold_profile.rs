//! Threshold profiles and their severity-tagged records
//!
//! The API nests response time thresholds as
//! `{"primary": [...], "secondary": [...]}` where each list holds at most one
//! record per severity. Records are addressed here by
//! `(ThresholdLocation, Severity)` so callers never deal with list positions.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::impl_api_entity;
use crate::serde_helpers::flexible_int;

/// Alert severity of a threshold record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Trouble,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 2] = [Severity::Trouble, Severity::Critical];

    /// Wire code: 2 for trouble, 3 for critical
    pub const fn code(self) -> i64 {
        match self {
            Self::Trouble => 2,
            Self::Critical => 3,
        }
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            2 => Some(Self::Trouble),
            3 => Some(Self::Critical),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trouble => "trouble",
            Self::Critical => "critical",
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = flexible_int(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown severity {code}, expected 2 or 3")))
    }
}

/// Which set of probe locations a response time threshold applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdLocation {
    Primary,
    Secondary,
}

impl ThresholdLocation {
    pub const ALL: [ThresholdLocation; 2] = [ThresholdLocation::Primary, ThresholdLocation::Secondary];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// One response time rule
///
/// `severity` stays a raw code so unknown values from the server decode and
/// are ignored by the lookups instead of failing the whole profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityThreshold {
    #[serde(deserialize_with = "flexible_int")]
    pub severity: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub comparison_operator: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub strategy: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub value: i64,
    #[serde(default, deserialize_with = "flexible_int")]
    pub polls_check: i64,
}

/// Response time rules per location set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTimeThreshold {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary: Vec<SeverityThreshold>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<SeverityThreshold>,
}

impl ResponseTimeThreshold {
    fn list(&self, location: ThresholdLocation) -> &Vec<SeverityThreshold> {
        match location {
            ThresholdLocation::Primary => &self.primary,
            ThresholdLocation::Secondary => &self.secondary,
        }
    }

    fn list_mut(&mut self, location: ThresholdLocation) -> &mut Vec<SeverityThreshold> {
        match location {
            ThresholdLocation::Primary => &mut self.primary,
            ThresholdLocation::Secondary => &mut self.secondary,
        }
    }

    /// Record for `severity` at `location`, matched by severity code.
    pub fn get(&self, location: ThresholdLocation, severity: Severity) -> Option<&SeverityThreshold> {
        self.list(location).iter().find(|record| record.severity == severity.code())
    }

    /// Stamp `severity` onto `record` and store it, replacing any record with
    /// the same severity. Trouble is kept ahead of critical.
    pub fn set(&mut self, location: ThresholdLocation, severity: Severity, mut record: SeverityThreshold) {
        record.severity = severity.code();
        let list = self.list_mut(location);
        list.retain(|existing| existing.severity != record.severity);
        list.push(record);
        list.sort_by_key(|existing| existing.severity);
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// Content change rule: alert when the page changes by `value` percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentChange {
    pub severity: Severity,
    #[serde(default = "default_comparison_operator", deserialize_with = "flexible_int")]
    pub comparison_operator: i64,
    #[serde(deserialize_with = "flexible_int")]
    pub value: i64,
}

fn default_comparison_operator() -> i64 {
    1
}

fn default_profile_type() -> i64 {
    1
}

fn default_down_location_threshold() -> i64 {
    3
}

/// Accepts either a plain bool or the `{severity, value}` object some
/// responses use for `website_content_modified`.
fn content_modified<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Modified {
        Flag(bool),
        Rule { value: bool },
    }

    Ok(match Option::<Modified>::deserialize(deserializer)? {
        Some(Modified::Flag(flag) | Modified::Rule { value: flag }) => flag,
        None => false,
    })
}

/// Alerting thresholds shared by monitors of one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdProfile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    /// 1 = static thresholds, 2 = AI-based
    #[serde(default = "default_profile_type", deserialize_with = "flexible_int")]
    pub profile_type: i64,
    #[serde(default = "default_down_location_threshold", deserialize_with = "flexible_int")]
    pub down_location_threshold: i64,
    #[serde(default, deserialize_with = "content_modified")]
    pub website_content_modified: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub website_content_changes: Vec<ContentChange>,
    #[serde(default, skip_serializing_if = "ResponseTimeThreshold::is_empty")]
    pub response_time_threshold: ResponseTimeThreshold,
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self {
            profile_id: String::new(),
            profile_name: String::new(),
            monitor_type: String::new(),
            profile_type: default_profile_type(),
            down_location_threshold: default_down_location_threshold(),
            website_content_modified: false,
            website_content_changes: Vec::new(),
            response_time_threshold: ResponseTimeThreshold::default(),
        }
    }
}

impl_api_entity!(ThresholdProfile, profile_id, "threshold profile");
