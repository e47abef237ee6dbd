// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scanrs::config::settings::Settings;
use scanrs::domain::search::provider::SearchProvider;
use scanrs::domain::services::scan_service::ScanService;
use scanrs::infrastructure::search::duckduckgo::DuckDuckGoSearchProvider;
use scanrs::infrastructure::search::google::GoogleSearchProvider;
use scanrs::presentation::routes;
use scanrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting scanrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Build search providers. A missing Google key or engine id is not
    //    an error; the scan degrades to the fallback provider.
    let primary: Option<Arc<dyn SearchProvider>> =
        settings.google.credentials().map(|(api_key, cx)| {
            Arc::new(GoogleSearchProvider::new(
                settings.google.endpoint.clone(),
                api_key.to_string(),
                cx.to_string(),
                Duration::from_millis(settings.google.timeout_ms),
            )) as Arc<dyn SearchProvider>
        });
    info!(google_configured = primary.is_some(), "scan_env_check");

    let fallback: Arc<dyn SearchProvider> = Arc::new(DuckDuckGoSearchProvider::new(
        settings.duckduckgo.endpoint.clone(),
        Duration::from_millis(settings.duckduckgo.timeout_ms),
    ));

    let service = Arc::new(ScanService::new(primary, fallback));

    // 4. Start HTTP server
    let app = routes::app(service);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
