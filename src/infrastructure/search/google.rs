// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::SearchResult;
use crate::domain::search::provider::{ProviderError, SearchProvider};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::error;

/// Google Custom Search JSON API adapter. One bounded GET per scan; no
/// retries. Requires both an API key and a search-engine id.
pub struct GoogleSearchProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    cx: String,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchBody {
    #[serde(default)]
    items: Vec<GoogleItem>,
}

#[derive(Debug, Default, Deserialize)]
struct GoogleItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
}

impl GoogleSearchProvider {
    pub fn new(endpoint: String, api_key: String, cx: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint,
            api_key,
            cx,
        }
    }

    fn map_items(items: Vec<GoogleItem>) -> Vec<SearchResult> {
        items
            .into_iter()
            .filter(|item| !item.title.is_empty() && !item.link.is_empty())
            .map(|item| SearchResult::new(item.title, item.link, "google"))
            .collect()
    }

    /// Best-effort error detail from a Google error body.
    fn extract_error_detail(body: &serde_json::Value) -> Option<String> {
        let error = body.get("error")?;
        error
            .get("message")
            .or_else(|| error.get("status"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", "10"),
            ])
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| Self::extract_error_detail(&body));
            // Key and engine id stay out of the logs; lengths only.
            error!(
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                cx_length = self.cx.len(),
                api_key_length = self.api_key.len(),
                "google_api_error"
            );
            let message = match detail {
                Some(d) => format!("Google API {}: {}", status.as_u16(), d),
                None => format!("Google API {}", status.as_u16()),
            };
            return Err(ProviderError::Upstream(message));
        }

        let body: GoogleSearchBody = response
            .json()
            .await
            .map_err(|_| ProviderError::Parse("Google response was not valid JSON".to_string()))?;

        Ok(Self::map_items(body.items))
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        // without_url keeps the keyed query string out of error text
        ProviderError::Network(err.without_url().to_string())
    }
}
