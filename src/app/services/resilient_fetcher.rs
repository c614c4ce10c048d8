//! Ordered multi-source fetching with a synthetic fallback
//!
//! Live feeds are served by several unreliable endpoints. Sources are tried
//! strictly one after another; the first that produces a valid value wins and
//! the rest are never started. When every source fails the caller's synthetic
//! fallback is used, so a fetch always yields a value.

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::constants::DEFAULT_ATTEMPT_TIMEOUT_SECS;
use crate::{Error, Result};

/// One way of obtaining a value, e.g. a direct or proxied endpoint
pub struct SourceAttempt<'a, T> {
    name: String,
    run: Box<dyn FnOnce() -> BoxFuture<'a, Result<T>> + Send + 'a>,
}

impl<'a, T> SourceAttempt<'a, T> {
    /// Wrap a lazily started source; `run` is only called when the attempt is reached
    pub fn new<F, Fut>(name: impl Into<String>, run: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<T>> + Send + 'a,
    {
        Self {
            name: name.into(),
            run: Box::new(move || run().boxed()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> std::fmt::Debug for SourceAttempt<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceAttempt")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Where a fetched value came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum FetchOrigin {
    Live { source: String },
    Synthetic,
}

/// A value produced by [`ResilientFetcher::fetch_with_fallback`]
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,

    pub origin: FetchOrigin,

    /// Sources that failed or timed out before the value was obtained
    pub failed_attempts: usize,
}

impl<T> Fetched<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_live(&self) -> bool {
        matches!(self.origin, FetchOrigin::Live { .. })
    }
}

/// Sequential source fetcher with a per-attempt time budget
#[derive(Debug, Clone)]
pub struct ResilientFetcher {
    attempt_timeout: Duration,
}

impl Default for ResilientFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS))
    }
}

impl ResilientFetcher {
    pub fn new(attempt_timeout: Duration) -> Self {
        Self { attempt_timeout }
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Try each source in order, falling back to a synthetic value
    ///
    /// A source failure or timeout is logged and the next source is tried.
    /// Exhaustion is not an error: `synthetic_fallback` must always be able to
    /// produce a value without external dependencies.
    pub async fn fetch_with_fallback<'a, T, F>(
        &self,
        feed: &str,
        attempts: Vec<SourceAttempt<'a, T>>,
        synthetic_fallback: F,
    ) -> Fetched<T>
    where
        F: FnOnce() -> T,
    {
        let total = attempts.len();
        let mut failed_attempts = 0;

        for (index, attempt) in attempts.into_iter().enumerate() {
            let SourceAttempt { name, run } = attempt;
            debug!(
                feed = feed,
                source = %name,
                attempt = index + 1,
                total = total,
                "Trying source"
            );

            let started = Instant::now();
            let outcome = match tokio::time::timeout(self.attempt_timeout, run()).await {
                Ok(result) => result,
                Err(_) => Err(Error::timeout(&name, self.attempt_timeout)),
            };

            match outcome {
                Ok(value) => {
                    info!(
                        feed = feed,
                        source = %name,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Fetched from live source"
                    );
                    return Fetched {
                        value,
                        origin: FetchOrigin::Live { source: name },
                        failed_attempts,
                    };
                }
                Err(e) => {
                    failed_attempts += 1;
                    warn!(feed = feed, source = %name, error = %e, "Source attempt failed");
                }
            }
        }

        if total == 0 {
            debug!(feed = feed, "No live sources configured, using synthetic value");
        } else {
            warn!(
                feed = feed,
                failed = failed_attempts,
                "All live sources failed, using synthetic fallback"
            );
        }

        Fetched {
            value: synthetic_fallback(),
            origin: FetchOrigin::Synthetic,
            failed_attempts,
        }
    }
}
