//
//  profilescout
//  api/polling.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Polling of long-running server jobs until they finish.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use super::common::ApiError;

/// Default delay between two status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default overall wait before giving up.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(300_000);

/// Message used when a job fails without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "deep research job failed";

/// Settings for [`wait_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between status checks.
    pub interval: Duration,
    /// Total time allowed, measured from the first check.
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl PollOptions {
    /// Builds options from millisecond values.
    pub fn from_millis(interval_ms: u64, timeout_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

/// Where a job stands after one status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobProgress {
    /// Not finished yet.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished with an error, optionally described by the server.
    Failed(Option<String>),
}

/// A status payload the poller can interpret.
pub trait JobStatus {
    /// Reports the job's progress.
    fn progress(&self) -> JobProgress;
}

/// Checks a job's status until it completes, fails or runs out of time.
///
/// `fetch` is called with the job id once per check. Errors it returns are
/// propagated unchanged. A failed job becomes a Generic error with status
/// 500 and the server's error text; running past `options.timeout` becomes a
/// Generic error with status 408.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use profilescout::api::{wait_for, ApiError, JobProgress, JobStatus, PollOptions};
///
/// struct Done;
/// impl JobStatus for Done {
///     fn progress(&self) -> JobProgress {
///         JobProgress::Completed
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let options = PollOptions { interval: Duration::from_millis(1), timeout: Duration::from_secs(1) };
/// let done = wait_for("job-1", &options, |_id| async { Ok::<_, ApiError>(Done) }).await;
/// assert!(done.is_ok());
/// # });
/// ```
pub async fn wait_for<T, F, Fut>(
    job_id: &str,
    options: &PollOptions,
    mut fetch: F,
) -> Result<T, ApiError>
where
    T: JobStatus,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let started = Instant::now();
    let mut checks: u32 = 0;

    loop {
        let status = fetch(job_id.to_string()).await?;
        checks += 1;

        match status.progress() {
            JobProgress::Completed => {
                debug!(job_id, checks, "job completed");
                return Ok(status);
            }
            JobProgress::Failed(reason) => {
                let reason = reason
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                return Err(ApiError::generic(500, reason));
            }
            JobProgress::Running => {}
        }

        let elapsed = started.elapsed();
        if elapsed > options.timeout {
            return Err(ApiError::generic(
                408,
                format!(
                    "deep research job {} did not finish within {}ms",
                    job_id,
                    options.timeout.as_millis()
                ),
            ));
        }

        debug!(
            job_id,
            checks,
            elapsed_ms = elapsed.as_millis() as u64,
            "job still running"
        );
        tokio::time::sleep(options.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct Fake {
        progress: JobProgress,
        total: u32,
    }

    impl JobStatus for Fake {
        fn progress(&self) -> JobProgress {
            self.progress.clone()
        }
    }

    fn fast() -> PollOptions {
        PollOptions::from_millis(1, 5_000)
    }

    fn scripted(
        states: Vec<Fake>,
    ) -> (
        Arc<Mutex<Vec<String>>>,
        impl FnMut(String) -> std::future::Ready<Result<Fake, ApiError>>,
    ) {
        let queue = Arc::new(Mutex::new(VecDeque::from(states)));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let fetch = move |id: String| {
            log.lock().unwrap().push(id);
            let next = queue.lock().unwrap().pop_front();
            std::future::ready(next.ok_or_else(|| ApiError::generic(0, "script exhausted")))
        };
        (seen, fetch)
    }

    fn fake(progress: JobProgress) -> Fake {
        Fake { progress, total: 0 }
    }

    #[tokio::test]
    async fn test_returns_completed_payload() {
        let (seen, fetch) = scripted(vec![
            fake(JobProgress::Running),
            fake(JobProgress::Running),
            Fake {
                progress: JobProgress::Completed,
                total: 1,
            },
        ]);

        let done = wait_for("job-7", &fast(), fetch).await.unwrap();

        assert_eq!(done.total, 1);
        assert_eq!(*seen.lock().unwrap(), vec!["job-7"; 3]);
    }

    #[tokio::test]
    async fn test_failed_job_is_generic_500() {
        let (_, fetch) = scripted(vec![fake(JobProgress::Failed(Some("x".into())))]);

        let err = wait_for("job-1", &fast(), fetch).await.unwrap_err();

        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "x");
    }

    #[tokio::test]
    async fn test_failed_job_without_reason_uses_default() {
        let (_, fetch) = scripted(vec![fake(JobProgress::Failed(None))]);

        let err = wait_for("job-1", &fast(), fetch).await.unwrap_err();

        assert_eq!(err.message(), DEFAULT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_times_out_with_408() {
        let options = PollOptions::from_millis(5, 20);
        let fetch = |_id: String| async { Ok::<_, ApiError>(fake(JobProgress::Running)) };

        let err = wait_for("job-slow", &options, fetch).await.unwrap_err();

        assert_eq!(err.status(), 408);
        assert!(err.message().contains("job-slow"));
        assert!(err.message().contains("20ms"));
    }

    #[tokio::test]
    async fn test_abandoned_wait_stops_polling() {
        let (seen, fetch) = scripted(vec![fake(JobProgress::Running); 10]);
        let options = PollOptions::from_millis(200, 5_000);

        let outcome =
            tokio::time::timeout(Duration::from_millis(50), wait_for("job-2", &options, fetch)).await;
        assert!(outcome.is_err());
        assert_eq!(seen.lock().unwrap().len(), 1);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_errors_propagate_unchanged() {
        let fetch = |_id: String| async {
            Err::<Fake, _>(ApiError::NotFound {
                message: "request failed with status 404: no such job".into(),
            })
        };

        let err = wait_for("missing", &fast(), fetch).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::NotFound {
                message: "request failed with status 404: no such job".into()
            }
        );
    }
}
