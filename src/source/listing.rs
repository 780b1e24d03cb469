//! Paged JSON listing endpoint
//!
//! `GET <endpoint>?page={N}&results={page_size}` returning `{"results": [...]}`.

use super::DataSource;
use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{JsonValue, Record, StringMap};
use async_trait::async_trait;
use tracing::debug;

/// Data source backed by a paged HTTP listing endpoint
#[derive(Debug)]
pub struct HttpDataSource {
    client: HttpClient,
    endpoint: String,
    page_param: String,
    page_size_param: String,
    page_size: u32,
    records_path: String,
    query: StringMap,
}

impl HttpDataSource {
    /// Build a source (and its HTTP client) from a feed config
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(HttpClientConfig::from(&config.http))?;
        Ok(Self::with_client(client, config))
    }

    fn with_client(client: HttpClient, config: &FeedConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            page_param: config.page_param.clone(),
            page_size_param: config.page_size_param.clone(),
            page_size: config.page_size,
            records_path: config.records_path.clone(),
            query: config.query.clone(),
        }
    }

    /// Query parameters for a page request
    fn request_for(&self, page: u32) -> RequestConfig {
        let mut request = RequestConfig::new();
        for (key, value) in &self.query {
            request = request.query(key, value);
        }
        request = request.query(&self.page_param, page.to_string());
        if !self.page_size_param.is_empty() {
            request = request.query(&self.page_size_param, self.page_size.to_string());
        }
        request
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Record>> {
        debug!(page, endpoint = %self.endpoint, "Fetching page");
        let body: JsonValue = self
            .client
            .get_json(&self.endpoint, &self.request_for(page))
            .await?;
        extract_records(&body, &self.records_path)
    }
}

/// Pull the records array out of a response body by dot path
pub fn extract_records(body: &JsonValue, path: &str) -> Result<Vec<Record>> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = body;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        current = current
            .get(part)
            .ok_or_else(|| Error::record_extraction(path, format!("field '{part}' is missing")))?;
    }

    match current {
        JsonValue::Array(records) => Ok(records.clone()),
        other => Err(Error::record_extraction(
            path,
            format!("expected an array, found {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
