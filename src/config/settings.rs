// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器和两个搜索后端的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Google Custom Search 配置
    pub google: GoogleSettings,
    /// DuckDuckGo HTML 搜索配置
    pub duckduckgo: DuckDuckGoSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Google Custom Search 配置设置
///
/// `api_key` 和 `cx` 都缺一不可；缺少任何一个时不调用该后端，
/// 扫描以受限可见性降级而不是报错。
#[derive(Debug, Deserialize)]
pub struct GoogleSettings {
    /// API 密钥（可空，从环境变量提供，绝不写入日志）
    pub api_key: Option<String>,
    /// 自定义搜索引擎 ID（可空）
    pub cx: Option<String>,
    /// JSON 搜索端点
    pub endpoint: String,
    /// 单次调用超时（毫秒）
    pub timeout_ms: u64,
}

impl GoogleSettings {
    /// Both key and engine id must be non-empty for the provider to run.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let key = self.api_key.as_deref().filter(|s| !s.is_empty())?;
        let cx = self.cx.as_deref().filter(|s| !s.is_empty())?;
        Some((key, cx))
    }
}

/// DuckDuckGo HTML 搜索配置设置
#[derive(Debug, Deserialize)]
pub struct DuckDuckGoSettings {
    /// HTML 搜索端点
    pub endpoint: String,
    /// 单次调用超时（毫秒）
    pub timeout_ms: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCANRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 内置默认值，在配置文件与环境变量覆盖之前应用
    fn defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Google Custom Search defaults (keys stay unset)
            .set_default("google.endpoint", "https://www.googleapis.com/customsearch/v1")?
            .set_default("google.timeout_ms", 6000)?
            // DuckDuckGo defaults
            .set_default("duckduckgo.endpoint", "https://html.duckduckgo.com/html/")?
            .set_default("duckduckgo.timeout_ms", 5500)
    }
}
