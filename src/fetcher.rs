//! HTTP fetcher for index URLs ("lists of lists").

use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ListError, Result};

const TIMEOUT_SECS: u64 = 30;

/// Maximum size of a single index body (10 MB)
/// The firebog "all" index is a few KB, so this only guards against garbage
const MAX_INDEX_SIZE: usize = 10 * 1024 * 1024;

/// HTTP client for fetching index URLs
///
/// Index URLs are public, so this client carries no appliance session state.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with default settings
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("adguard-list-manager/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one index URL and return the filter-list URLs it names
    pub async fn fetch_index(&self, url: &str) -> Result<HashSet<String>> {
        info!("Fetching source list {}...", url);

        let body = self.fetch_text(url).await?;
        let urls = parse_index(&body);

        info!("Source list {} names {} filter lists", url, urls.len());
        Ok(urls)
    }

    /// Fetch several index URLs and merge them into a single batch
    pub async fn expand_indexes(&self, urls: &[String]) -> Result<HashSet<String>> {
        let mut merged = HashSet::new();
        for url in urls {
            merged.extend(self.fetch_index(url).await?);
        }
        debug!("Expanded {} source lists into {} entries", urls.len(), merged.len());
        Ok(merged)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let fetch_error = |reason: String| ListError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > MAX_INDEX_SIZE {
                return Err(fetch_error(format!(
                    "response too large: {} bytes (max: {} bytes)",
                    content_length, MAX_INDEX_SIZE
                )));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;

        // Chunked responses carry no Content-Length
        if body.len() > MAX_INDEX_SIZE {
            return Err(fetch_error(format!(
                "response too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_INDEX_SIZE
            )));
        }

        Ok(body)
    }
}

/// Parse a newline-delimited index body into a set of filter-list URLs.
///
/// Lines are trimmed; blank lines are dropped and duplicates collapse.
pub fn parse_index(content: &str) -> HashSet<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
