//! Error types for feedscroll
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//! The pagination controller never propagates these: a failed page fetch is
//! logged and swallowed at the controller boundary.

use thiserror::Error;

/// The main error type for feedscroll
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to extract records from path '{path}': {message}")]
    RecordExtraction { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a record extraction error
    pub fn record_extraction(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RecordExtraction {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for feedscroll
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("page_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be at least 1"
        );

        let err = Error::http_status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = Error::record_extraction("results", "field is missing");
        assert_eq!(
            err.to_string(),
            "Failed to extract records from path 'results': field is missing"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::Timeout { timeout_ms: 50 });
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Request timeout after 50ms"));
    }
}
