//! Operation deadlines
//!
//! A lifecycle call installs its deadline once with [`with_deadline`]; the
//! transport reads it back through [`current_deadline`] so that it never
//! schedules a backoff sleep past it.

use std::future::Future;

use site24x7_domain::{ApiError, Result};
use tokio::time::Instant;
use tracing::warn;

tokio::task_local! {
    static DEADLINE: Instant;
}

/// Deadline of the enclosing [`with_deadline`] scope, if any.
pub fn current_deadline() -> Option<Instant> {
    DEADLINE.try_with(|deadline| *deadline).ok()
}

/// Run `fut` under `deadline`.
///
/// When the deadline passes, in-flight I/O is dropped and the call fails with
/// a `Transient` error. Nested scopes keep the earlier of the two deadlines.
pub async fn with_deadline<F, T>(deadline: Instant, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let effective = current_deadline().map_or(deadline, |outer| outer.min(deadline));

    DEADLINE
        .scope(effective, async move {
            match tokio::time::timeout_at(effective, fut).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("operation deadline exceeded");
                    Err(ApiError::transient("operation deadline exceeded"))
                }
            }
        })
        .await
}
