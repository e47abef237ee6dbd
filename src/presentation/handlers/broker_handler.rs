// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{http::header, response::IntoResponse, Json};

use crate::domain::models::broker::BROKER_DIRECTORY;

/// 返回静态数据代理目录
///
/// 目录内容即相关性过滤使用的域名白名单，附带风险等级和删除入口。
/// 内容随版本发布变化，允许客户端缓存一天。
pub async fn list_brokers() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=86400")],
        Json(BROKER_DIRECTORY),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_brokers_response_is_cacheable() {
        let response = list_brokers().await.into_response();
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("public, max-age=86400")
        );
    }
}
