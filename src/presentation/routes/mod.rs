// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::scan_service::ScanService;
use crate::presentation::handlers::{broker_handler, scan_handler};
use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route(
            "/api/search",
            get(scan_handler::scan).post(scan_handler::scan),
        )
        .route("/api/brokers", get(broker_handler::list_brokers))
}

/// 组装完整应用：路由加扫描服务扩展
pub fn app(service: Arc<ScanService>) -> Router {
    routes().layer(Extension(service))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> Json<serde_json::Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
