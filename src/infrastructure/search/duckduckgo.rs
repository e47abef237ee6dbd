// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::SearchResult;
use crate::domain::search::provider::{ProviderError, SearchProvider};
use crate::infrastructure::search::ddg_html;
use async_trait::async_trait;
use std::time::Duration;

/// DuckDuckGo HTML search adapter. Unauthenticated fallback used only when
/// the keyed provider produced zero results. One bounded GET, no retries;
/// parsing is delegated to [`ddg_html`].
pub struct DuckDuckGoSearchProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoSearchProvider {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, endpoint }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .header("Referer", "https://duckduckgo.com/")
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "DuckDuckGo returned status {}",
                status.as_u16()
            )));
        }

        let html = response.text().await.map_err(map_send_error)?;
        Ok(ddg_html::parse(&html))
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(err.without_url().to_string())
    }
}
