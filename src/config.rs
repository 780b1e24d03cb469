//! Feed configuration
//!
//! Everything the client needs to talk to a paged listing endpoint. Every
//! field has a default so an empty YAML document (or no file at all) yields
//! a working randomuser.me configuration.

use crate::error::{Error, Result, ResultExt};
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// Top-Level Feed Config
// ============================================================================

/// Complete feed configuration, loadable from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Listing endpoint URL
    pub endpoint: String,

    /// Query parameter carrying the page number
    pub page_param: String,

    /// Query parameter carrying the page size
    pub page_size_param: String,

    /// Records requested per page
    pub page_size: u32,

    /// First page number
    pub start_page: u32,

    /// Dot path to the records array in the response body
    pub records_path: String,

    /// Extra query parameters sent with every request (e.g. `seed`, `nat`)
    pub query: StringMap,

    /// HTTP client settings
    pub http: HttpSettings,

    /// Bottom observer settings
    pub observer: ObserverSettings,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_param: "page".to_string(),
            page_size_param: "results".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            start_page: 1,
            records_path: "results".to_string(),
            query: StringMap::new(),
            http: HttpSettings::default(),
            observer: ObserverSettings::default(),
        }
    }
}

impl FeedConfig {
    /// Parse a config from a YAML string and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    /// Render the config as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the config for values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint)?;

        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.start_page == 0 {
            return Err(Error::invalid_value("start_page", "pages are numbered from 1"));
        }
        if self.start_page == u32::MAX {
            return Err(Error::invalid_value("start_page", "leaves no room for a next page"));
        }
        if self.page_param.is_empty() {
            return Err(Error::invalid_value("page_param", "must not be empty"));
        }
        if self.records_path.is_empty() {
            return Err(Error::invalid_value("records_path", "must not be empty"));
        }
        let threshold = self.observer.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(Error::invalid_value(
                "observer.threshold",
                format!("{threshold} is outside (0, 1]"),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value("http.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Add an extra query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Disable request pacing
    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.http.rate_limit = false;
        self
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Pace requests with a token bucket
    pub rate_limit: bool,

    /// Sustained request rate
    pub requests_per_second: u32,

    /// Burst allowance
    pub burst_size: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("feedscroll/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: true,
            requests_per_second: 5,
            burst_size: 5,
        }
    }
}

impl HttpSettings {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Observer Settings
// ============================================================================

/// Bottom observer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverSettings {
    /// Fraction of the sentinel that must be visible to count as reached
    pub threshold: f64,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self { threshold: 1.0 }
    }
}
