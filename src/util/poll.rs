//! Bounded status polling with optional backoff.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::RunStatus;

/// Polling policy for waiting on an asynchronous run.
///
/// Defaults to a fixed one-second interval with enough attempts for roughly
/// a minute of waiting. A multiplier above 1.0 turns the cadence into capped
/// exponential backoff.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Maximum number of status checks before the run is given up on.
    pub max_attempts: u32,
    /// Delay before the second and subsequent checks.
    pub initial_interval: Duration,
    /// Upper bound on the delay once the multiplier is applied.
    pub max_interval: Duration,
    /// Interval multiplier between checks; 1.0 keeps a fixed cadence.
    pub multiplier: f64,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(10),
            multiplier: 1.0,
        }
    }
}

impl PollPolicy {
    /// Poll `check` until the run completes.
    ///
    /// Sleeps only between checks, so a run that completes on check N costs
    /// exactly N invocations. `failed`, `cancelled` and `expired` error out
    /// immediately, as does a status outside the known set; exhausting the
    /// attempt budget is a service error and leaves the caller usable.
    pub async fn wait_until_completed<F, Fut>(&self, mut check: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RunStatus>>,
    {
        let mut interval = self.initial_interval;

        for attempt in 1..=self.max_attempts {
            let status = check().await?;
            match status {
                RunStatus::Completed => return Ok(()),
                RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired => {
                    return Err(Error::service(format!("run ended as {status}")));
                }
                RunStatus::Unknown => {
                    return Err(Error::service("run reported an unrecognized status"));
                }
                RunStatus::Queued | RunStatus::InProgress => {
                    debug!(attempt, status = %status, "run not finished");
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(interval).await;
                interval = Duration::from_secs_f64(
                    (interval.as_secs_f64() * self.multiplier)
                        .min(self.max_interval.as_secs_f64()),
                );
            }
        }

        Err(Error::service(format!(
            "run did not complete within {} status checks",
            self.max_attempts
        )))
    }
}
