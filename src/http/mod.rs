//! HTTP client module
//!
//! Provides the HTTP client used by the listing data source.
//!
//! # Features
//!
//! - **Request Pacing**: Token bucket rate limiter using governor
//! - **Status Classification**: Non-2xx responses become `Error::HttpStatus`
//! - **JSON Parsing**: Typed or `serde_json::Value` response bodies

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
