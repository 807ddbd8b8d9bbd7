use std::time::Duration;

use site24x7_common::{ErrorClassification, ErrorSeverity};
use site24x7_domain::{ApiError, ConfigError, ErrorKind};
use thiserror::Error;

use crate::schema::{render, Diagnostic};

/// Errors surfaced to the host by provider operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid {resource} configuration: {}", render(.diagnostics))]
    Schema { resource: &'static str, diagnostics: Vec<Diagnostic> },

    #[error("provider configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown resource type: {0}")]
    UnknownResource(String),

    #[error("unknown data source: {0}")]
    UnknownDataSource(String),
}

impl ProviderError {
    /// The underlying API error, if any
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_not_found)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(err) => err.kind,
            Self::Schema { .. } => ErrorKind::Validation,
            Self::Config(_) | Self::UnknownResource(_) | Self::UnknownDataSource(_) => ErrorKind::Fatal,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Schema { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }
}

impl ErrorClassification for ProviderError {
    fn is_retryable(&self) -> bool {
        self.api_error().is_some_and(|err| err.is_retryable())
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Api(err) => err.severity(),
            _ => ErrorSeverity::Error,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        self.api_error().and_then(|err| err.retry_after())
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
