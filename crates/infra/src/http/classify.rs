//! Error classifier
//!
//! Maps an HTTP status plus the decoded response envelope onto an
//! [`ErrorKind`]. A response is a failure when its status is not 2xx or when
//! the envelope carries a nonzero `error_code`.
//!
//! | Kind | Trigger |
//! |------|---------|
//! | NotFound | 404, or an `error_code` in [`RESOURCE_MISSING_CODES`] |
//! | Unauthorized | 401, 403 |
//! | Validation | 400, 422, or a 2xx with `error_info` |
//! | RateLimited | 429 |
//! | Transient | 5xx |
//! | Fatal | everything else, including undecodable bodies |

use std::time::Duration;

use site24x7_domain::{ApiError, Envelope, ErrorKind, Result};

/// Envelope codes the API uses for "no such resource" on non-404 responses.
pub const RESOURCE_MISSING_CODES: &[i64] = &[1101, 1103, 1150];

/// Response metadata the classifier needs besides the body.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    pub status: u16,
    pub request_id: Option<String>,
    pub retry_after: Option<Duration>,
}

/// Decode a response body and return the envelope's `data`, or the
/// classified error.
pub fn interpret(meta: ResponseMeta, body: &[u8]) -> Result<serde_json::Value> {
    let success = (200..300).contains(&meta.status);

    let envelope = if body.iter().all(u8::is_ascii_whitespace) {
        Envelope::default()
    } else {
        match serde_json::from_slice::<Envelope>(body) {
            Ok(envelope) => envelope,
            Err(err) if success => {
                return Err(ApiError::fatal(format!("undecodable response payload: {err}"))
                    .with_status(meta.status)
                    .with_request_id(meta.request_id));
            }
            // Error pages (proxies, load balancers) are often not JSON.
            Err(_) => Envelope::default(),
        }
    };

    let failed_in_band = envelope.error_code.is_some_and(|code| code != 0);
    if success && !failed_in_band {
        return Ok(envelope.data);
    }

    Err(classify(&meta, envelope))
}

/// Classify a failed response.
pub fn classify(meta: &ResponseMeta, envelope: Envelope) -> ApiError {
    let code = envelope.error_code.filter(|code| *code != 0);
    let field = envelope.error_info.as_ref().and_then(|info| info.keys().next().cloned());

    let kind = match meta.status {
        404 => ErrorKind::NotFound,
        _ if code.is_some_and(|code| RESOURCE_MISSING_CODES.contains(&code)) => ErrorKind::NotFound,
        401 | 403 => ErrorKind::Unauthorized,
        400 | 422 => ErrorKind::Validation,
        429 => ErrorKind::RateLimited,
        500..=599 => ErrorKind::Transient,
        200..=299 if field.is_some() => ErrorKind::Validation,
        _ => ErrorKind::Fatal,
    };

    let message = envelope
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| default_message(meta.status).to_string());

    let mut err = ApiError::new(kind, message)
        .with_status(meta.status)
        .with_api_code(code)
        .with_request_id(meta.request_id.clone());

    if kind == ErrorKind::Validation {
        if let Some(field) = field {
            err = err.with_field(field);
        }
    }
    if kind == ErrorKind::RateLimited {
        err = err.with_retry_after(meta.retry_after);
    }

    err
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "resource not found",
        422 => "unprocessable entity",
        429 => "too many requests",
        500..=599 => "server error",
        200..=299 => "request rejected",
        _ => "unexpected response",
    }
}
