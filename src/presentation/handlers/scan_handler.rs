// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    Json,
};
use futures::FutureExt;
use serde::Deserialize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, warn};

use crate::domain::models::scan::ScanQuery;
use crate::domain::services::scan_service::ScanService;

/// Raw `name`/`city` pair from a query string or request body.
#[derive(Debug, Default, Deserialize)]
pub struct ScanParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// 处理扫描请求
///
/// 接受 GET 查询参数或 POST JSON / 表单请求体中的 `name` 与 `city`。
/// 缺少任一字段时返回 400；输入通过校验后总是返回 200 的完整信封，
/// 即使两个搜索后端全部失败。
pub async fn scan(
    Extension(service): Extension<Arc<ScanService>>,
    method: Method,
    Query(params): Query<ScanParams>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let (name, city) = read_request_params(&method, params, &headers, &body);

    let query = match ScanQuery::parse(&name, &city) {
        Some(query) => query,
        None => {
            warn!(
                has_name = !name.is_empty(),
                has_city = !city.is_empty(),
                "scan_invalid_input"
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(ScanService::invalid_input_response()),
            )
                .into_response();
        }
    };

    // Once input is accepted the caller always gets a well-formed body.
    match AssertUnwindSafe(service.scan(&query)).catch_unwind().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(_) => {
            error!("scan_unexpected_error");
            (StatusCode::OK, Json(ScanService::degraded_response())).into_response()
        }
    }
}

/// Merge query parameters with an optional non-GET body. Body values take
/// precedence only when non-empty after trimming; a body that fails to
/// parse falls back to the query parameters.
fn read_request_params(
    method: &Method,
    params: ScanParams,
    headers: &HeaderMap,
    body: &[u8],
) -> (String, String) {
    let mut name = trimmed(params.name);
    let mut city = trimmed(params.city);

    if method != Method::GET {
        let content_type = headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        let body_params: Option<ScanParams> = if content_type.contains("application/json") {
            serde_json::from_slice(body).ok()
        } else if content_type.contains("application/x-www-form-urlencoded") {
            serde_urlencoded::from_bytes(body).ok()
        } else {
            None
        };

        if let Some(body_params) = body_params {
            let body_name = trimmed(body_params.name);
            if !body_name.is_empty() {
                name = body_name;
            }
            let body_city = trimmed(body_params.city);
            if !body_city.is_empty() {
                city = body_city;
            }
        }
    }

    (name, city)
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: Option<&str>, city: Option<&str>) -> ScanParams {
        ScanParams {
            name: name.map(|s| s.to_string()),
            city: city.map(|s| s.to_string()),
        }
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_get_uses_query_params() {
        let (name, city) = read_request_params(
            &Method::GET,
            params(Some(" Jane Smith "), Some("Austin")),
            &HeaderMap::new(),
            b"",
        );
        assert_eq!(name, "Jane Smith");
        assert_eq!(city, "Austin");
    }

    #[test]
    fn test_json_body_overrides_query() {
        let (name, city) = read_request_params(
            &Method::POST,
            params(Some("Query Name"), Some("Query City")),
            &json_headers(),
            br#"{"name": "Body Name", "city": "Body City"}"#,
        );
        assert_eq!(name, "Body Name");
        assert_eq!(city, "Body City");
    }

    #[test]
    fn test_empty_body_value_falls_back_to_query() {
        let (name, city) = read_request_params(
            &Method::POST,
            params(Some("Query Name"), Some("Query City")),
            &json_headers(),
            br#"{"name": "   ", "city": "Body City"}"#,
        );
        assert_eq!(name, "Query Name");
        assert_eq!(city, "Body City");
    }

    #[test]
    fn test_malformed_body_falls_back_to_query() {
        let (name, city) = read_request_params(
            &Method::POST,
            params(Some("Query Name"), Some("Query City")),
            &json_headers(),
            b"{not json",
        );
        assert_eq!(name, "Query Name");
        assert_eq!(city, "Query City");
    }

    #[test]
    fn test_form_body() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        let (name, city) = read_request_params(
            &Method::POST,
            params(None, None),
            &headers,
            b"name=Jane+Smith&city=Austin",
        );
        assert_eq!(name, "Jane Smith");
        assert_eq!(city, "Austin");
    }

    #[test]
    fn test_get_ignores_body() {
        let (name, city) = read_request_params(
            &Method::GET,
            params(Some("Jane Smith"), Some("Austin")),
            &json_headers(),
            br#"{"name": "Other", "city": "Elsewhere"}"#,
        );
        assert_eq!(name, "Jane Smith");
        assert_eq!(city, "Austin");
    }
}
