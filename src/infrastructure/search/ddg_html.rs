// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Textual parser for the DuckDuckGo HTML search page.
//!
//! The page is scanned with a fixed result-block marker rather than a DOM
//! parser so that upstream markup drift stays a localized, testable
//! failure. Each block carries a `result__a` anchor whose href is usually
//! wrapped in a `/l/?uddg=` redirector.

use crate::domain::models::scan::SearchResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Every organic and ad block opens with this class prefix.
const RESULT_BLOCK_MARKER: &str = "class=\"result ";
const MAX_RESULTS: usize = 20;

static RESULT_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)class="result__a"[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
        .expect("result anchor regex")
});

static UDDG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"uddg=([^&]+)").expect("uddg regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag strip regex"));

/// Extract up to [`MAX_RESULTS`] organic results from a DuckDuckGo HTML
/// page. Malformed blocks are skipped; an empty page parses to an empty
/// vector, not an error.
pub fn parse(html: &str) -> Vec<SearchResult> {
    let mut items = Vec::new();

    for block in html.split(RESULT_BLOCK_MARKER).skip(1) {
        if is_ad_block(block) {
            continue;
        }

        let caps = match RESULT_ANCHOR_RE.captures(block) {
            Some(caps) => caps,
            None => continue,
        };

        let title = clean_title(&caps[2]);
        let link = match resolve_href(&caps[1]) {
            Some(link) => link,
            None => continue,
        };

        if title.is_empty() || link.is_empty() {
            continue;
        }
        // Drop links that still point at the tracking redirector.
        if link.contains("duckduckgo.com/y.js") || link.contains("duckduckgo.com/l/") {
            continue;
        }

        items.push(SearchResult::new(title, link, "duckduckgo"));
        if items.len() >= MAX_RESULTS {
            break;
        }
    }

    items
}

/// Ad blocks carry `result--ad` near the start of the block.
fn is_ad_block(block: &str) -> bool {
    let head = &block.as_bytes()[..block.len().min(200)];
    head.windows(b"result--ad".len()).any(|w| w == b"result--ad")
}

/// Resolve an anchor href to an absolute outbound URL, unwrapping the
/// `uddg` redirect parameter when present.
fn resolve_href(raw_href: &str) -> Option<String> {
    if let Some(caps) = UDDG_RE.captures(raw_href) {
        return urlencoding::decode(&caps[1]).ok().map(|s| s.into_owned());
    }
    if raw_href.starts_with("http") {
        return Some(raw_href.to_string());
    }
    if raw_href.starts_with("//") {
        return Some(format!("https:{}", raw_href));
    }
    None
}

/// Decode entities, strip embedded tags and collapse whitespace.
fn clean_title(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    let stripped = TAG_RE.replace_all(&decoded, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
