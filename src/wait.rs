// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval condition polling against remote state.

use crate::constants::poll::{INTERVAL_SECS, TIMEOUT_SECS};
use crate::error::{FixtureError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Interval and deadline for a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(INTERVAL_SECS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

/// Evaluate `condition` until it reports `true`, fails, or `timeout` elapses.
///
/// The first check runs immediately. Between checks the task sleeps for
/// `interval`, never past the deadline, so a timeout is reported no later
/// than `timeout` plus the duration of the last check.
pub async fn poll<F, Fut>(interval: Duration, timeout: Duration, mut condition: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();
    let deadline = start + timeout;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        if condition().await? {
            debug!("Condition satisfied after {} attempt(s)", attempt);
            return Ok(());
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(FixtureError::Timeout {
                waited: now - start,
            });
        }
        sleep(interval.min(deadline - now)).await;
    }
}

/// [`poll`] with the interval and timeout taken from `settings`
pub async fn poll_with<F, Fut>(settings: PollSettings, condition: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    poll(settings.interval, settings.timeout, condition).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_true_on_first_check_does_not_sleep() {
        let start = Instant::now();
        poll(Duration::from_secs(5), Duration::from_secs(60), || async { Ok(true) })
            .await
            .unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_becomes_true_after_retries() {
        let calls = AtomicU32::new(0);
        poll(Duration::from_secs(1), Duration::from_secs(60), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(n >= 2) }
        })
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_true_times_out_within_one_interval() {
        let interval = Duration::from_secs(4);
        let timeout = Duration::from_secs(10);
        let start = Instant::now();

        let err = poll(interval, timeout, || async { Ok(false) })
            .await
            .unwrap_err();

        let elapsed = start.elapsed();
        assert!(matches!(err, FixtureError::Timeout { .. }));
        assert!(elapsed >= timeout);
        assert!(elapsed <= timeout + interval);
    }

    #[tokio::test(start_paused = true)]
    async fn test_condition_error_aborts_immediately() {
        let calls = AtomicU32::new(0);
        let err = poll(Duration::from_secs(1), Duration::from_secs(60), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(FixtureError::Kubeconfig("no cluster".to_string()))
            }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, FixtureError::Kubeconfig(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_timeout_checks_once() {
        let calls = AtomicU32::new(0);
        let result = poll(Duration::from_secs(1), Duration::ZERO, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(false) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_settings() {
        let settings = PollSettings::default();
        assert_eq!(settings.interval, Duration::from_secs(5));
        assert_eq!(settings.timeout, Duration::from_secs(180));
    }
}
