//! 错误类型

use thiserror::Error;

/// Failures talking to the completion API.
///
/// The `Display` text is what callers of the relay eventually see after the
/// `"Error: "` prefix, so variants render a plain description of the failure.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} from POST {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// 启动配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("OpenAI API key is not configured (set OPENAI_API_KEY or api_key in the config file)")]
    MissingApiKey,

    #[error("Invalid upstream base URL '{0}': {1}")]
    InvalidBaseUrl(String, url::ParseError),

    #[error("Invalid upstream base URL '{0}': scheme must be http or https")]
    UnsupportedScheme(String),

    #[error("request_timeout must be at least 1 second (leave it unset for no timeout)")]
    ZeroTimeout,
}
