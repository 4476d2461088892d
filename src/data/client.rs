//! Star Wars API client
//!
//! Fetches resources by path (`"people/1"`, `"films/"`), parses the body as
//! JSON, and keeps every successful response in a process-lifetime cache.
//! Failures are counted on the shared run counters and never retried.

use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::CacheManager;
use crate::stats::RunCounters;

/// Base URL for the Star Wars API
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Per-request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Errors that can occur when fetching a resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection-level failure, including a body that could not be read
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// No complete response within the configured timeout
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered with status 400 or above
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body was not valid JSON
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for fetching resources from SWAPI
#[derive(Debug, Clone)]
pub struct SwapiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API root, always ending in `/`
    base_url: String,
    /// Bound on a single request, headers and body included
    timeout: Duration,
    /// Parsed responses keyed by resource path
    cache: CacheManager,
    /// Shared counters; every failed fetch is recorded here once
    counters: Arc<RunCounters>,
}

impl SwapiClient {
    /// Creates a new client against `base_url`
    ///
    /// Certificate validation is disabled so the demo tolerates the remote
    /// service's certificate. This weakens transport trust, so a warning is
    /// logged every time a client is built.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        counters: Arc<RunCounters>,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().danger_accept_invalid_certs(true).build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        warn!(
            base_url = %base_url,
            "TLS certificate validation is disabled for API requests"
        );

        Ok(Self {
            http_client,
            base_url,
            timeout,
            cache: CacheManager::new(),
            counters,
        })
    }

    /// The cache backing this client
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the resource at `path`
    ///
    /// # Behavior
    /// - A cached path returns the cached value without touching the network
    /// - Otherwise issues one GET, buffers the whole body, and parses it
    /// - A parsed value is cached before it is returned
    /// - Any failure increments the error counter once and leaves the cache alone
    pub async fn fetch(&self, path: &str) -> Result<Arc<Value>, FetchError> {
        if let Some(cached) = self.cache.read(path) {
            debug!(path, "Cache hit");
            return Ok(cached);
        }

        match self.fetch_from_api(path).await {
            Ok(value) => {
                debug!(path, "Fetched and cached");
                Ok(self.cache.write(path, value))
            }
            Err(e) => {
                self.counters.record_error();
                Err(e)
            }
        }
    }

    /// Races the request against the timeout
    async fn fetch_from_api(&self, path: &str) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        match tokio::time::timeout(self.timeout, self.request(&url)).await {
            Ok(result) => result,
            // Dropping the request future aborts the in-flight request.
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    async fn request(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
