//! HTTP client with request pacing
//!
//! Thin wrapper over reqwest that handles:
//! - Request pacing with a token bucket
//! - Status classification (any non-2xx is an error)
//! - JSON body parsing
//!
//! No retries: a failed request is reported once and the caller decides
//! whether to ask again.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::config::HttpSettings;
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&HttpSettings::default())
    }
}

impl From<&HttpSettings> for HttpClientConfig {
    fn from(settings: &HttpSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            rate_limit: settings.rate_limit.then(|| {
                RateLimiterConfig::new(settings.requests_per_second, settings.burst_size)
            }),
            user_agent: settings.user_agent.clone(),
        }
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// HTTP client with request pacing
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Make a single GET request; any non-2xx status is an error
    async fn get(&self, url: &str, config: &RequestConfig) -> Result<Response> {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.get(url);
        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                });
            }
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: GET {}", url);
        Ok(response)
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> Result<T> {
        let response = self.get(url, config).await?;
        // Read as text first so a malformed body surfaces as a parse error
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
