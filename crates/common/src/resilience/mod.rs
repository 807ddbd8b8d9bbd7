//! Resilience primitives used by the HTTP transport.
//!
//! Only the retry backoff lives here: the transport owns the retry loop
//! itself because it has to interleave token refresh, deadline checks and
//! `Retry-After` handling with the backoff schedule.

pub mod retry;

pub use retry::{BackoffStrategy, Jitter, RetryConfig, RetryConfigBuilder, RetryConfigError};
