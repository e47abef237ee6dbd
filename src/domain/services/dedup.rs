// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan::SearchResult;
use std::collections::HashSet;

/// Deduplicate merged provider results by link. First occurrence wins and
/// the incoming order is preserved. Results with an empty link are dropped.
pub fn dedupe_by_link(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .filter(|item| {
            let key = item.link.trim();
            if key.is_empty() {
                return false;
            }
            seen.insert(key.to_string())
        })
        .collect()
}
