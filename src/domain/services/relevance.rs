// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::broker::BROKER_DIRECTORY;
use crate::domain::models::scan::SearchResult;
use std::collections::HashSet;
use url::Url;

/// Title keywords that mark people-search or public-records listings.
const PEOPLE_SEARCH_KEYWORDS: &[&str] = &[
    "people search",
    "public record",
    "background check",
    "phone number",
    "address history",
    "find people",
    "people finder",
    "lookup",
    "person search",
];

/// Extract the lowercased hostname of a link with any leading `www.`
/// stripped. Returns `None` for unparseable URLs.
pub fn normalized_host(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    Some(host.to_ascii_lowercase())
}

/// Whether a hostname is a known broker domain or a subdomain of one.
pub fn is_broker_host(host: &str) -> bool {
    BROKER_DIRECTORY
        .iter()
        .any(|b| host == b.domain || host.ends_with(&format!(".{}", b.domain)))
}

/// Broker hostname of a result link, if its host is on the allowlist.
pub fn broker_host(link: &str) -> Option<String> {
    normalized_host(link).filter(|host| is_broker_host(host))
}

/// Decide whether a result is about the queried person. Broker-domain hits
/// are always kept; otherwise the first and last name tokens must both
/// appear in the title or the link, or the title must carry a
/// people-search keyword.
pub fn is_relevant(item: &SearchResult, name: &str) -> bool {
    if broker_host(&item.link).is_some() {
        return true;
    }

    let title_lower = item.title.to_lowercase();
    let link_lower = item.link.to_lowercase();

    let name_parts: Vec<String> = name
        .to_lowercase()
        .split_whitespace()
        .filter(|p| p.len() > 1)
        .map(|p| p.to_string())
        .collect();

    if name_parts.len() >= 2 {
        let first = &name_parts[0];
        let last = &name_parts[name_parts.len() - 1];
        if title_lower.contains(first.as_str()) && title_lower.contains(last.as_str()) {
            return true;
        }
        if link_lower.contains(first.as_str()) && link_lower.contains(last.as_str()) {
            return true;
        }
    }

    PEOPLE_SEARCH_KEYWORDS
        .iter()
        .any(|kw| title_lower.contains(kw))
}

/// Drop results that fail every relevance check.
pub fn filter_relevant(items: Vec<SearchResult>, name: &str) -> Vec<SearchResult> {
    items
        .into_iter()
        .filter(|item| is_relevant(item, name))
        .collect()
}

/// Count distinct broker hostnames present in a result set.
pub fn distinct_broker_hosts(items: &[SearchResult]) -> usize {
    let hosts: HashSet<String> = items
        .iter()
        .filter_map(|item| broker_host(&item.link))
        .collect();
    hosts.len()
}
