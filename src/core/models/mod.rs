//! 核心数据模型

mod config;

pub use config::{RelayConfig, UpstreamProxyConfig, DEFAULT_BASE_URL};
