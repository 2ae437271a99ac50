//! Bounded polling for synchronization with the rendered DOM.
//!
//! Every action and read in the suite suspends until the target reaches the
//! required state or a deadline passes; this module is the single polling
//! primitive they all share.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::result::{SuiteError, SuiteResult};

/// Default budget for element-level actions (5 seconds)
pub const DEFAULT_ACTION_TIMEOUT_MS: u64 = 5_000;

/// Default budget for full-page navigation (30 seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Options for a bounded wait
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Total budget before the wait fails
    pub timeout: Duration,
    /// Pause between probe attempts
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_ACTION_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl WaitOptions {
    /// Create options with the default budgets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Poll `probe` until it yields a value or the budget in `options` expires.
///
/// The probe returns `Ok(None)` while the awaited state has not been reached
/// yet. A probe error aborts the wait immediately; only exhaustion of the
/// budget produces [`SuiteError::Timeout`], labelled with `what`.
///
/// # Errors
///
/// Returns any error the probe itself produced, or `Timeout` on expiry.
pub async fn until<T, F, Fut>(options: &WaitOptions, what: &str, mut probe: F) -> SuiteResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SuiteResult<Option<T>>>,
{
    let deadline = Instant::now() + options.timeout;
    loop {
        if let Some(value) = probe().await? {
            return Ok(value);
        }
        if Instant::now() >= deadline {
            return Err(SuiteError::Timeout {
                what: what.to_string(),
                ms: options.timeout.as_millis() as u64,
            });
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn fast_options() -> WaitOptions {
        WaitOptions::new()
            .with_timeout(Duration::from_millis(50))
            .with_poll_interval(Duration::from_millis(5))
    }

    #[test]
    fn options_defaults() {
        let options = WaitOptions::default();
        assert_eq!(options.timeout, Duration::from_millis(DEFAULT_ACTION_TIMEOUT_MS));
        assert_eq!(
            options.poll_interval,
            Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
        );
    }

    #[tokio::test]
    async fn until_returns_first_ready_value() {
        let value = until(&fast_options(), "ready", || async { Ok(Some(42)) }).await;
        assert_eq!(value.ok(), Some(42));
    }

    #[tokio::test]
    async fn until_retries_until_ready() {
        let mut attempts = 0;
        let value = until(&fast_options(), "third try", || {
            attempts += 1;
            let ready = attempts >= 3;
            async move { Ok(ready.then_some("done")) }
        })
        .await;
        assert_eq!(value.ok(), Some("done"));
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn until_times_out_with_label() {
        let result: SuiteResult<()> =
            until(&fast_options(), "a banner", || async { Ok(None) }).await;
        match result {
            Err(SuiteError::Timeout { what, ms }) => {
                assert_eq!(what, "a banner");
                assert_eq!(ms, 50);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn until_propagates_probe_errors() {
        let result: SuiteResult<()> = until(&fast_options(), "never", || async {
            Err(SuiteError::Evaluation {
                message: "boom".to_string(),
            })
        })
        .await;
        assert!(matches!(result, Err(SuiteError::Evaluation { .. })));
    }
}
