// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::{ExposureLevel, ProviderReport, ProviderStatus};

/// Map the relevant result count and distinct broker-domain hit count to an
/// exposure level.
///
/// `low` is only reported when every provider that was actually invoked
/// succeeded; an empty result set with incomplete visibility reads as
/// `moderate` so an incomplete scan never gives false reassurance.
pub fn score(
    relevant_count: usize,
    broker_hits: usize,
    report: &ProviderReport,
    limited_visibility: bool,
) -> ExposureLevel {
    if relevant_count >= 4 || broker_hits >= 2 {
        return ExposureLevel::Elevated;
    }
    if relevant_count >= 1 {
        return ExposureLevel::Moderate;
    }

    let fallback_ok_or_skipped = report.duckduckgo.ok
        || report.duckduckgo.error.as_deref() == Some(ProviderStatus::SKIPPED);
    let high_confidence = !limited_visibility && report.google.ok && fallback_ok_or_skipped;
    if high_confidence {
        ExposureLevel::Low
    } else {
        ExposureLevel::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_visibility_report() -> ProviderReport {
        ProviderReport {
            google: ProviderStatus::succeeded(0, 10),
            duckduckgo: ProviderStatus::skipped(),
        }
    }

    #[test]
    fn test_clean_scan_is_low() {
        let report = full_visibility_report();
        assert_eq!(score(0, 0, &report, false), ExposureLevel::Low);
    }

    #[test]
    fn test_any_result_is_moderate() {
        let report = full_visibility_report();
        assert_eq!(score(1, 0, &report, false), ExposureLevel::Moderate);
        assert_eq!(score(3, 1, &report, false), ExposureLevel::Moderate);
    }

    #[test]
    fn test_result_volume_is_elevated() {
        let report = full_visibility_report();
        assert_eq!(score(4, 0, &report, false), ExposureLevel::Elevated);
    }

    #[test]
    fn test_broker_hits_alone_are_elevated() {
        let report = full_visibility_report();
        assert_eq!(score(2, 2, &report, false), ExposureLevel::Elevated);
    }

    #[test]
    fn test_monotonic_in_result_count() {
        let report = full_visibility_report();
        let levels: Vec<_> = [0usize, 1, 4]
            .iter()
            .map(|&n| score(n, 0, &report, false))
            .collect();
        assert!(levels[0] <= levels[1]);
        assert!(levels[1] <= levels[2]);
    }

    #[test]
    fn test_empty_but_limited_visibility_is_moderate() {
        let report = ProviderReport {
            google: ProviderStatus::failed("timed out", 6000),
            duckduckgo: ProviderStatus::succeeded(0, 300),
        };
        assert_eq!(score(0, 0, &report, true), ExposureLevel::Moderate);
    }

    #[test]
    fn test_empty_with_failed_fallback_is_moderate() {
        let report = ProviderReport {
            google: ProviderStatus::succeeded(0, 100),
            duckduckgo: ProviderStatus::failed("DuckDuckGo returned status 503", 80),
        };
        assert_eq!(score(0, 0, &report, true), ExposureLevel::Moderate);
    }
}
