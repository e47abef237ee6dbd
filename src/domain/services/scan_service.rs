// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::{
    ExposureLevel, ProviderReport, ProviderStatus, ScanQuery, ScanResponse, SearchResult,
};
use crate::domain::search::provider::SearchProvider;
use crate::domain::services::{dedup, exposure, relevance};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

const MSG_COMPLETE: &str = "Scan complete.";
const MSG_LIMITED: &str = "Scan complete. Limited visibility because some sources were unavailable.";
const MSG_INVALID: &str = "Missing name or city.";
const MSG_DEGRADED: &str = "Scan complete with limited visibility.";
const GOOGLE_NOT_CONFIGURED: &str = "Google API keys not configured";

/// Orchestrates one scan request: primary provider first, fallback only
/// when the primary yielded zero results, then dedupe, relevance filter
/// and exposure scoring. Stateless; every call is independent.
pub struct ScanService {
    primary: Option<Arc<dyn SearchProvider>>,
    fallback: Arc<dyn SearchProvider>,
}

impl ScanService {
    /// `primary` is `None` when the keyed provider is unconfigured; the
    /// scan then degrades to the fallback with limited visibility.
    pub fn new(primary: Option<Arc<dyn SearchProvider>>, fallback: Arc<dyn SearchProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Run the full scan pipeline and assemble the response envelope.
    /// Provider failures are absorbed into per-provider statuses; this
    /// method itself never fails.
    pub async fn scan(&self, query: &ScanQuery) -> ScanResponse {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let query_string = query.query_string();
        let mut report = ProviderReport::new();
        let mut results: Vec<SearchResult> = Vec::new();

        info!(
            request_id = %request_id,
            query_length = query_string.len(),
            google_configured = self.primary.is_some(),
            "scan_request"
        );

        match &self.primary {
            Some(provider) => {
                let start = Instant::now();
                match provider.search(&query_string).await {
                    Ok(items) => {
                        report.google =
                            ProviderStatus::succeeded(items.len(), elapsed_ms(start));
                        results.extend(items);
                    }
                    Err(err) => {
                        warn!(request_id = %request_id, provider = provider.name(), error = %err, "provider_failed");
                        report.google =
                            ProviderStatus::failed(err.to_string(), elapsed_ms(start));
                    }
                }
            }
            None => {
                report.google = ProviderStatus::failed(GOOGLE_NOT_CONFIGURED, 0);
            }
        }

        // Fallback fires on an empty primary result set, including a
        // successful-but-empty one. A satisfied primary skips it.
        if results.is_empty() {
            let start = Instant::now();
            match self.fallback.search(&query_string).await {
                Ok(items) => {
                    report.duckduckgo =
                        ProviderStatus::succeeded(items.len(), elapsed_ms(start));
                    results.extend(items);
                }
                Err(err) => {
                    warn!(request_id = %request_id, provider = self.fallback.name(), error = %err, "provider_failed");
                    report.duckduckgo =
                        ProviderStatus::failed(err.to_string(), elapsed_ms(start));
                }
            }
        } else {
            report.duckduckgo = ProviderStatus::skipped();
        }

        let deduped = dedup::dedupe_by_link(results);
        let total = deduped.len();
        let relevant = relevance::filter_relevant(deduped, &query.name);
        let broker_hits = relevance::distinct_broker_hosts(&relevant);

        let limited_visibility = self.primary.is_none() || report.any_failed();
        let level = exposure::score(relevant.len(), broker_hits, &report, limited_visibility);
        let message = if limited_visibility {
            MSG_LIMITED
        } else {
            MSG_COMPLETE
        };

        info!(
            request_id = %request_id,
            total_results = total,
            relevant_results = relevant.len(),
            broker_hits,
            exposure = ?level,
            limited_visibility,
            duration_ms = elapsed_ms(started),
            "scan_response"
        );

        ScanResponse {
            success: true,
            request_id,
            exposure: level,
            results: relevant,
            limited_visibility,
            providers: report,
            message: message.to_string(),
        }
    }

    /// Envelope for requests rejected before any network call.
    pub fn invalid_input_response() -> ScanResponse {
        ScanResponse {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            exposure: ExposureLevel::Moderate,
            results: Vec::new(),
            limited_visibility: true,
            providers: ProviderReport::invalid_input(),
            message: MSG_INVALID.to_string(),
        }
    }

    /// Envelope for an unexpected failure after validation. The caller
    /// still gets a well-formed body, never a bare 500.
    pub fn degraded_response() -> ScanResponse {
        ScanResponse {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            exposure: ExposureLevel::Moderate,
            results: Vec::new(),
            limited_visibility: true,
            providers: ProviderReport::new(),
            message: MSG_DEGRADED.to_string(),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::provider::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        name: &'static str,
        outcome: Result<Vec<SearchResult>, ProviderError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn returning(name: &'static str, items: Vec<SearchResult>) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome: Ok(items),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str, err: ProviderError) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn query() -> ScanQuery {
        ScanQuery::parse("Jane Smith", "Austin").unwrap()
    }

    fn broker_results(n: usize) -> Vec<SearchResult> {
        (0..n)
            .map(|i| {
                SearchResult::new(
                    format!("Jane Smith record {}", i),
                    format!("https://www.spokeo.com/jane-smith/{}", i),
                    "google",
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_fallback_skipped_when_primary_has_results() {
        let google = StubProvider::returning("google", broker_results(2));
        let ddg = StubProvider::returning("duckduckgo", vec![]);
        let service = ScanService::new(Some(google.clone()), ddg.clone());

        let response = service.scan(&query()).await;

        assert_eq!(ddg.call_count(), 0);
        assert_eq!(google.call_count(), 1);
        assert_eq!(response.providers.duckduckgo, ProviderStatus::skipped());
        assert!(!response.limited_visibility);
    }

    #[tokio::test]
    async fn test_fallback_invoked_on_empty_primary() {
        let google = StubProvider::returning("google", vec![]);
        let ddg = StubProvider::returning("duckduckgo", broker_results(1));
        let service = ScanService::new(Some(google), ddg.clone());

        let response = service.scan(&query()).await;

        assert_eq!(ddg.call_count(), 1);
        assert!(response.providers.duckduckgo.ok);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.exposure, ExposureLevel::Moderate);
    }

    #[tokio::test]
    async fn test_fallback_invoked_when_primary_unconfigured() {
        let ddg = StubProvider::returning("duckduckgo", vec![]);
        let service = ScanService::new(None, ddg.clone());

        let response = service.scan(&query()).await;

        assert_eq!(ddg.call_count(), 1);
        assert_eq!(
            response.providers.google.error.as_deref(),
            Some("Google API keys not configured")
        );
        assert!(response.limited_visibility);
        // No results under incomplete visibility reads as moderate.
        assert_eq!(response.exposure, ExposureLevel::Moderate);
    }

    #[tokio::test]
    async fn test_primary_timeout_recorded_and_fallback_used() {
        let google = StubProvider::failing("google", ProviderError::Timeout);
        let ddg = StubProvider::returning("duckduckgo", broker_results(3));
        let service = ScanService::new(Some(google), ddg.clone());

        let response = service.scan(&query()).await;

        assert_eq!(ddg.call_count(), 1);
        assert_eq!(
            response.providers.google.error.as_deref(),
            Some("timed out")
        );
        assert!(response.limited_visibility);
        assert_eq!(response.exposure, ExposureLevel::Moderate);
    }

    #[tokio::test]
    async fn test_both_providers_failing_still_yields_envelope() {
        let google = StubProvider::failing(
            "google",
            ProviderError::Upstream("Google API 500".to_string()),
        );
        let ddg = StubProvider::failing(
            "duckduckgo",
            ProviderError::Upstream("DuckDuckGo returned status 503".to_string()),
        );
        let service = ScanService::new(Some(google), ddg);

        let response = service.scan(&query()).await;

        assert!(response.success);
        assert!(response.results.is_empty());
        assert!(response.limited_visibility);
        assert_eq!(response.exposure, ExposureLevel::Moderate);
        assert!(response.message.contains("Limited visibility"));
    }

    #[tokio::test]
    async fn test_duplicate_links_collapse() {
        let google = StubProvider::returning(
            "google",
            vec![
                SearchResult::new("Jane Smith A", "https://www.spokeo.com/jane-smith", "google"),
                SearchResult::new("Jane Smith B", "https://www.spokeo.com/jane-smith", "google"),
            ],
        );
        let ddg = StubProvider::returning("duckduckgo", vec![]);
        let service = ScanService::new(Some(google), ddg);

        let response = service.scan(&query()).await;

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "Jane Smith A");
    }

    #[tokio::test]
    async fn test_scan_is_deterministic_for_fixed_stubs() {
        let google = StubProvider::returning("google", broker_results(5));
        let ddg = StubProvider::returning("duckduckgo", vec![]);
        let service = ScanService::new(Some(google), ddg);

        let first = service.scan(&query()).await;
        let second = service.scan(&query()).await;

        assert_eq!(first.exposure, second.exposure);
        assert_eq!(first.limited_visibility, second.limited_visibility);
        let links = |r: &ScanResponse| {
            r.results
                .iter()
                .map(|item| item.link.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(links(&first), links(&second));
    }

    #[test]
    fn test_invalid_input_envelope() {
        let response = ScanService::invalid_input_response();
        assert!(!response.success);
        assert!(response.results.is_empty());
        assert_eq!(
            response.providers.google.error.as_deref(),
            Some("invalid-input")
        );
        assert_eq!(
            response.providers.duckduckgo.error.as_deref(),
            Some("invalid-input")
        );
    }
}
