//! 配置加载
//! 配置文件 (可选) + 命令行 / 环境变量覆盖

use std::path::{Path, PathBuf};

use crate::core::models::RelayConfig;
use crate::error::ConfigError;

/// 命令行 / 环境变量提供的配置项, 优先级高于配置文件
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Upstream API base URL
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "BIND_ADDRESS")]
    pub bind_address: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Upstream request timeout in seconds (no timeout when unset)
    #[arg(long, env = "REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Proxy for outbound calls (http://, https://, socks5://)
    #[arg(long, env = "UPSTREAM_PROXY")]
    pub upstream_proxy: Option<String>,

    /// Directory for daily rolling log files
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut RelayConfig) {
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(bind_address) = self.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = Some(timeout);
        }
        if let Some(url) = self.upstream_proxy {
            config.upstream_proxy.enabled = !url.trim().is_empty();
            config.upstream_proxy.url = url;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
    }
}

/// 配置存储服务
pub struct ConfigStorage;

impl ConfigStorage {
    /// 读取 JSON 配置文件, 缺省字段使用默认值
    pub fn load_file(path: &Path) -> Result<RelayConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// 加载最终配置并校验
    pub fn load(
        path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<RelayConfig, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => RelayConfig::default(),
        };
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
