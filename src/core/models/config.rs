//! 应用配置模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// 中继服务配置
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// OpenAI API 密钥
    pub api_key: String,
    /// 上游 API 根地址
    pub base_url: String,
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// 上游请求超时(秒), None 表示不设置
    pub request_timeout: Option<u64>,
    /// 上游代理配置
    pub upstream_proxy: UpstreamProxyConfig,
    /// 日志文件目录, None 时只输出到终端
    pub log_dir: Option<PathBuf>,
}

/// 上游代理配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UpstreamProxyConfig {
    /// 是否启用
    pub enabled: bool,
    /// 代理地址 (http://, https://, socks5://)
    pub url: String,
}

impl RelayConfig {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: None,
            upstream_proxy: UpstreamProxyConfig::default(),
            log_dir: None,
        }
    }

    /// Full URL of the chat completion resource.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(self.base_url.clone(), e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(self.base_url.clone()));
        }

        // 0 秒会让每次上游调用立即超时
        if self.request_timeout == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new()
    }
}

// api_key 不能出现在日志里
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("upstream_proxy", &self.upstream_proxy)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
