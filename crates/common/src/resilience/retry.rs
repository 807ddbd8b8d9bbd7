//! Backoff schedule and jitter for retried requests.
//!
//! `RetryConfig` describes how many attempts an operation gets and how long to
//! wait between them. It does not run the operation; callers ask for
//! [`RetryConfig::delay_for`] between attempts.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Errors raised when a retry configuration is inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RetryConfigError {
    #[error("max_attempts must be greater than 0")]
    ZeroAttempts,

    #[error("exponential base must be at least 1.0")]
    InvalidBase,

    #[error("jitter ratio must be within [0.0, 1.0), got {0}")]
    InvalidJitter(f64),
}

/// Backoff strategy for calculating retry delays
#[derive(Debug, Clone, PartialEq)]
pub enum BackoffStrategy {
    /// Fixed delay between retries
    Fixed(Duration),
    /// Exponential backoff: initial_delay * base^retry, capped at max_delay
    Exponential { initial_delay: Duration, base: f64, max_delay: Duration },
}

impl BackoffStrategy {
    /// Calculate the un-jittered delay before retry number `retry` (0-based).
    pub fn calculate_delay(&self, retry: u32) -> Duration {
        match self {
            BackoffStrategy::Fixed(delay) => *delay,
            BackoffStrategy::Exponential { initial_delay, base, max_delay } => {
                let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
                let delay = initial_delay.as_secs_f64() * base.powi(exponent);
                if !delay.is_finite() || delay >= max_delay.as_secs_f64() {
                    *max_delay
                } else {
                    Duration::from_secs_f64(delay)
                }
            }
        }
    }

    /// Upper bound any delay produced by this strategy must respect.
    pub fn cap(&self) -> Duration {
        match self {
            BackoffStrategy::Fixed(delay) => *delay,
            BackoffStrategy::Exponential { max_delay, .. } => *max_delay,
        }
    }
}

/// Jitter applied on top of the backoff delay
#[derive(Debug, Clone, PartialEq)]
pub enum Jitter {
    /// No jitter
    None,
    /// Uniform jitter of ±ratio around the computed delay
    Proportional(f64),
}

impl Jitter {
    /// Apply jitter to the calculated delay
    pub fn apply(&self, delay: Duration) -> Duration {
        match self {
            Jitter::None => delay,
            Jitter::Proportional(ratio) if *ratio <= 0.0 => delay,
            Jitter::Proportional(ratio) => {
                let factor = rand::thread_rng().gen_range((1.0 - ratio)..=(1.0 + ratio));
                delay.mul_f64(factor)
            }
        }
    }
}

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Backoff strategy for calculating delays
    pub backoff: BackoffStrategy,
    /// Jitter applied to every computed delay
    pub jitter: Jitter,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: BackoffStrategy::Exponential {
                initial_delay: Duration::from_millis(500),
                base: 2.0,
                max_delay: Duration::from_secs(5),
            },
            jitter: Jitter::Proportional(0.25),
        }
    }
}

impl RetryConfig {
    /// Create a configuration builder
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), RetryConfigError> {
        if self.max_attempts == 0 {
            return Err(RetryConfigError::ZeroAttempts);
        }

        if let BackoffStrategy::Exponential { base, .. } = &self.backoff {
            if *base < 1.0 {
                return Err(RetryConfigError::InvalidBase);
            }
        }

        if let Jitter::Proportional(ratio) = self.jitter {
            if !(0.0..1.0).contains(&ratio) {
                return Err(RetryConfigError::InvalidJitter(ratio));
            }
        }

        Ok(())
    }

    /// Delay to wait before retry number `retry` (0-based), jittered and capped.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let delay = self.jitter.apply(self.backoff.calculate_delay(retry));
        delay.min(self.backoff.cap())
    }

    /// Clamp an externally requested delay (e.g. `Retry-After`) to the cap.
    pub fn clamp(&self, requested: Duration) -> Duration {
        requested.min(self.backoff.cap())
    }

    /// Whether another attempt is allowed after `attempt` attempts (1-based).
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

/// Builder for RetryConfig with fluent API
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    pub fn new() -> Self {
        Self { config: RetryConfig::default() }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    pub fn fixed_backoff(mut self, delay: Duration) -> Self {
        self.config.backoff = BackoffStrategy::Fixed(delay);
        self
    }

    pub fn exponential_backoff(
        mut self,
        initial_delay: Duration,
        base: f64,
        max_delay: Duration,
    ) -> Self {
        self.config.backoff = BackoffStrategy::Exponential { initial_delay, base, max_delay };
        self
    }

    pub fn no_jitter(mut self) -> Self {
        self.config.jitter = Jitter::None;
        self
    }

    pub fn proportional_jitter(mut self, ratio: f64) -> Self {
        self.config.jitter = Jitter::Proportional(ratio);
        self
    }

    pub fn build(self) -> Result<RetryConfig, RetryConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
