// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// A validated scan request. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanQuery {
    pub name: String,
    pub city: String,
}

impl ScanQuery {
    /// Build a query from raw, possibly-empty input. Returns `None` when
    /// either field is empty after trimming.
    pub fn parse(name: &str, city: &str) -> Option<Self> {
        let name = name.trim();
        let city = city.trim();
        if name.is_empty() || city.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            city: city.to_string(),
        })
    }

    /// Composed provider query string. The name is quoted so providers
    /// treat it as a phrase.
    pub fn query_string(&self) -> String {
        format!("\"{}\" {}", self.name, self.city)
    }
}

/// One normalized result from a search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub source: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, link: impl Into<String>, source: &str) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            source: source.to_string(),
        }
    }
}

/// Per-provider outcome for a single scan request. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    pub ok: bool,
    pub count: usize,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderStatus {
    /// Marker for providers that were not invoked at all.
    pub const SKIPPED: &'static str = "skipped";

    pub fn skipped() -> Self {
        Self {
            ok: false,
            count: 0,
            duration_ms: 0,
            error: Some(Self::SKIPPED.to_string()),
        }
    }

    pub fn succeeded(count: usize, duration_ms: u64) -> Self {
        Self {
            ok: true,
            count,
            duration_ms,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            ok: false,
            count: 0,
            duration_ms,
            error: Some(error.into()),
        }
    }

    /// A skip is not a failure for limited-visibility purposes.
    pub fn failed_other_than_skipped(&self) -> bool {
        !self.ok && self.error.as_deref().map_or(false, |e| e != Self::SKIPPED)
    }
}

/// Ordinal risk label presented to the end user. Ordering matters:
/// `Low < Moderate < Elevated`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExposureLevel {
    Low,
    Moderate,
    Elevated,
}

/// Statuses of both providers for one request, keyed by provider name in
/// the JSON envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderReport {
    pub google: ProviderStatus,
    pub duckduckgo: ProviderStatus,
}

impl ProviderReport {
    /// Both providers start out as not-yet-invoked.
    pub fn new() -> Self {
        Self {
            google: ProviderStatus::skipped(),
            duckduckgo: ProviderStatus::skipped(),
        }
    }

    pub fn invalid_input() -> Self {
        Self {
            google: ProviderStatus::failed("invalid-input", 0),
            duckduckgo: ProviderStatus::failed("invalid-input", 0),
        }
    }

    pub fn any_failed(&self) -> bool {
        self.google.failed_other_than_skipped() || self.duckduckgo.failed_other_than_skipped()
    }
}

impl Default for ProviderReport {
    fn default() -> Self {
        Self::new()
    }
}

/// The JSON envelope returned for every scan request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub success: bool,
    pub request_id: String,
    pub exposure: ExposureLevel,
    pub results: Vec<SearchResult>,
    pub limited_visibility: bool,
    pub providers: ProviderReport,
    pub message: String,
}
