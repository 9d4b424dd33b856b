/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Generic sleep-poll loop shared by the index wait and flush wait.
//!
//! Both waits are the same control flow: probe a server-side state, stop on
//! a terminal answer, otherwise sleep a fixed interval and probe again,
//! bounded by an optional wall-clock timeout and a cancellation token.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Fixed sleep between probes. The loop never probes faster than this.
    pub interval: Duration,
    /// Wall-clock bound; `None` polls until the probe answers or the token
    /// cancels.
    pub timeout: Option<Duration>,
    /// Human-readable description used in the timeout error.
    pub waiting_for: String,
}

impl PollConfig {
    pub fn new(waiting_for: impl Into<String>) -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
            waiting_for: waiting_for.into(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Cancellation is cooperative and silent: a cancelled wait is not an error,
/// the server-side operation keeps running regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Ready(T),
    Cancelled,
}

/// Probes `probe` until it yields `Some`, the timeout elapses, or `cancel`
/// fires. A probe error aborts the wait immediately.
pub async fn poll_until<T, F, Fut>(
    config: &PollConfig,
    cancel: &CancellationToken,
    mut probe: F,
) -> Result<PollOutcome<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let started = Instant::now();
    loop {
        if cancel.is_cancelled() {
            return Ok(PollOutcome::Cancelled);
        }
        if let Some(value) = probe().await? {
            return Ok(PollOutcome::Ready(value));
        }
        if let Some(timeout) = config.timeout {
            let elapsed = started.elapsed();
            if elapsed >= timeout {
                return Err(Error::Timeout {
                    waiting_for: config.waiting_for.clone(),
                    elapsed_ms: elapsed.as_millis() as u64,
                });
            }
        }
        tokio::select! {
            _ = cancel.cancelled() => return Ok(PollOutcome::Cancelled),
            _ = tokio::time::sleep(config.interval) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_ready_on_first_probe() {
        let config = PollConfig::new("unit");
        let cancel = CancellationToken::new();
        let outcome = poll_until(&config, &cancel, || async { Ok(Some(42u32)) })
            .await
            .unwrap();
        assert_eq!(outcome, PollOutcome::Ready(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_probes_are_interval_spaced() {
        let config = PollConfig::new("unit");
        let cancel = CancellationToken::new();
        let calls = Arc::new(AtomicU32::new(0));
        let calls_ref = Arc::clone(&calls);
        let started = tokio::time::Instant::now();
        let outcome = poll_until(&config, &cancel, move || {
            let calls = Arc::clone(&calls_ref);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(if n >= 3 { Some(n) } else { None })
            }
        })
        .await
        .unwrap();
        assert_eq!(outcome, PollOutcome::Ready(3));
        // Two sleeps between three probes.
        assert_eq!(started.elapsed(), DEFAULT_POLL_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_elapses() {
        let config = PollConfig::new("index build")
            .with_timeout(Duration::from_millis(1600));
        let cancel = CancellationToken::new();
        let err = poll_until(&config, &cancel, || async { Ok(None::<u32>) })
            .await
            .unwrap_err();
        match err {
            Error::Timeout { waiting_for, elapsed_ms } => {
                assert_eq!(waiting_for, "index build");
                assert!(elapsed_ms >= 1600);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_error_aborts() {
        let config = PollConfig::new("unit");
        let cancel = CancellationToken::new();
        let err = poll_until(&config, &cancel, || async {
            Err::<Option<u32>, _>(Error::IndexBuild {
                reason: "out of memory".to_string(),
            })
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::IndexBuild { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_is_silent() {
        let config = PollConfig::new("unit");
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = poll_until(&config, &cancel, || async { Ok(None::<u32>) })
            .await
            .unwrap();
        assert_eq!(outcome, PollOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_sleep() {
        let config = PollConfig::new("unit");
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cancel_clone.cancel();
        });
        let outcome = poll_until(&config, &cancel, || async { Ok(None::<u32>) })
            .await
            .unwrap();
        assert_eq!(outcome, PollOutcome::Cancelled);
    }
}
