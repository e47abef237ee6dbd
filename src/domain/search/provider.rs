// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::SearchResult;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single provider call. Absorbed into the per-provider status
/// of the scan envelope; never surfaced as an HTTP-level error.
#[derive(Debug, Error, Clone)]
pub enum ProviderError {
    /// Non-2xx response from the backend, with best-effort detail.
    #[error("{0}")]
    Upstream(String),
    #[error("network error: {0}")]
    Network(String),
    /// Malformed JSON or HTML payload.
    #[error("{0}")]
    Parse(String),
    /// The call exceeded its per-provider deadline and was aborted.
    #[error("timed out")]
    Timeout,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform one bounded search call and return normalized results.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;

    /// Get the name of the search provider
    fn name(&self) -> &'static str;
}
