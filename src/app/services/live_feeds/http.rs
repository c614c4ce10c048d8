//! HTTP client abstraction for live feeds
//!
//! Feeds only need a GET returning the response body. The trait keeps the
//! transport swappable so feed logic can be exercised without a network.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::constants::USER_AGENT;
use crate::{Error, Result};

/// Trait for asynchronous HTTP GET requests
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the response body
    ///
    /// Non-success statuses are errors.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        trace!(url = url, "HTTP GET request starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            Error::http(url, format!("Request failed: {}", e))
        })?;

        let status = response.status();
        debug!(url = url, status = status.as_u16(), "HTTP response received");
        if !status.is_success() {
            return Err(Error::http(url, format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(url, format!("Failed to read response: {}", e)))?;

        trace!(url = url, bytes = bytes.len(), "HTTP response body read");
        Ok(bytes.to_vec())
    }
}
