//! Error types used throughout the provider
//!
//! Every failure that crosses the client boundary is an [`ApiError`]: the
//! transport classifies HTTP outcomes into an [`ErrorKind`] and attaches the
//! diagnostics the API returned (status, envelope code, request id, field).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use site24x7_common::{ErrorClassification, ErrorSeverity};
use thiserror::Error;

use crate::impl_domain_status_conversions;

/// Classification of an API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The addressed resource does not exist
    NotFound,
    /// Credentials were rejected, even after a token refresh
    Unauthorized,
    /// The request was rejected because of its content
    Validation,
    /// Throttled and the retry budget is exhausted
    RateLimited,
    /// Server-side or network failure and the retry budget is exhausted
    Transient,
    /// Anything that does not fit the other kinds
    Fatal,
}

impl_domain_status_conversions!(ErrorKind {
    NotFound => "not_found",
    Unauthorized => "unauthorized",
    Validation => "validation",
    RateLimited => "rate_limited",
    Transient => "transient",
    Fatal => "fatal",
});

/// Main error type for Site24x7 API operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {message}{}", diagnostics(.http_status, .api_code, .field, .request_id))]
pub struct ApiError {
    pub kind: ErrorKind,
    pub http_status: Option<u16>,
    /// `error_code` from the response envelope
    pub api_code: Option<i64>,
    pub message: String,
    /// Value of the `x-request-id` response header
    pub request_id: Option<String>,
    /// Offending field for validation errors, when the API names one
    pub field: Option<String>,
    /// Server-requested delay, taken from `Retry-After`
    pub retry_after: Option<Duration>,
}

fn diagnostics(
    http_status: &Option<u16>,
    api_code: &Option<i64>,
    field: &Option<String>,
    request_id: &Option<String>,
) -> String {
    let mut parts = Vec::new();
    if let Some(status) = http_status {
        parts.push(format!("status {status}"));
    }
    if let Some(code) = api_code {
        parts.push(format!("code {code}"));
    }
    if let Some(field) = field {
        parts.push(format!("field {field}"));
    }
    if let Some(request_id) = request_id {
        parts.push(format!("request id {request_id}"));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            http_status: None,
            api_code: None,
            message: message.into(),
            request_id: None,
            field: None,
            retry_after: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transient, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fatal, message)
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    #[must_use]
    pub fn with_api_code(mut self, code: Option<i64>) -> Self {
        self.api_code = code;
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_retry_after(mut self, delay: Option<Duration>) -> Self {
        self.retry_after = delay;
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

/// Returns true when the error reports a missing resource.
///
/// Lifecycle handlers use this to make read, delete and exists idempotent.
pub fn is_not_found(err: &ApiError) -> bool {
    err.is_not_found()
}

impl ErrorClassification for ApiError {
    fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimited | ErrorKind::Transient)
    }

    fn severity(&self) -> ErrorSeverity {
        match self.kind {
            ErrorKind::NotFound => ErrorSeverity::Info,
            ErrorKind::RateLimited | ErrorKind::Transient => ErrorSeverity::Warning,
            ErrorKind::Validation | ErrorKind::Fatal => ErrorSeverity::Error,
            ErrorKind::Unauthorized => ErrorSeverity::Critical,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        if self.is_retryable() {
            self.retry_after
        } else {
            None
        }
    }
}

/// Result type alias for Site24x7 API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_available_diagnostics() {
        let err = ApiError::not_found("Monitor not found")
            .with_status(404)
            .with_api_code(Some(1101))
            .with_request_id(Some("req-1".to_string()));

        assert_eq!(
            err.to_string(),
            "not_found error: Monitor not found (status 404, code 1101, request id req-1)"
        );
    }

    #[test]
    fn display_without_diagnostics_is_bare_message() {
        assert_eq!(ApiError::fatal("boom").to_string(), "fatal error: boom");
    }

    #[test]
    fn validation_errors_name_the_field() {
        let err = ApiError::validation("must not be empty").with_status(400).with_field("display_name");
        assert_eq!(err.field.as_deref(), Some("display_name"));
        assert!(err.to_string().contains("field display_name"));
    }

    #[test]
    fn is_not_found_predicate() {
        assert!(is_not_found(&ApiError::not_found("gone")));
        assert!(!is_not_found(&ApiError::transient("later")));
    }

    #[test]
    fn classification_by_kind() {
        let throttled = ApiError::new(ErrorKind::RateLimited, "slow down")
            .with_retry_after(Some(Duration::from_secs(2)));
        assert!(throttled.is_retryable());
        assert_eq!(throttled.severity(), ErrorSeverity::Warning);
        assert_eq!(throttled.retry_after(), Some(Duration::from_secs(2)));

        let denied = ApiError::unauthorized("invalid_grant");
        assert!(!denied.is_retryable());
        assert!(denied.is_critical());

        let missing = ApiError::not_found("gone").with_retry_after(Some(Duration::from_secs(1)));
        assert_eq!(missing.severity(), ErrorSeverity::Info);
        assert_eq!(missing.retry_after(), None);
    }

    #[test]
    fn error_kind_round_trips_through_strings() {
        assert_eq!(ErrorKind::RateLimited.to_string(), "rate_limited");
        assert_eq!("NOT_FOUND".parse::<ErrorKind>().unwrap(), ErrorKind::NotFound);
        assert!("bogus".parse::<ErrorKind>().is_err());
    }
}
