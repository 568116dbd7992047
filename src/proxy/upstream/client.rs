// 上游客户端 - OpenAI chat completions
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use crate::core::models::RelayConfig;
use crate::core::traits::ChatService;
use crate::error::UpstreamError;
use crate::proxy::mappers::error_classifier::classify_upstream_error;
use crate::proxy::mappers::openai::build_completion_payload;

/// Holds the reusable HTTP client and the credentials loaded at startup.
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    completions_url: String,
}

impl OpenAiClient {
    pub fn new(config: &RelayConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();

        // 默认不设置超时, 仅在配置时启用
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if config.upstream_proxy.enabled && !config.upstream_proxy.url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.upstream_proxy.url)
                .map_err(|e| UpstreamError::Client(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Upstream proxy enabled: {}", config.upstream_proxy.url);
        }

        let http_client = builder
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            completions_url: config.completions_url(),
        })
    }

    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    /// Sends one completion request and returns the raw response body.
    pub async fn complete(&self, message: &str) -> Result<String, UpstreamError> {
        let payload = build_completion_payload(message);

        let response = self
            .http_client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: self.completions_url.clone(),
            });
        }

        // 不解析响应, 原样返回
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ChatService for OpenAiClient {
    async fn get_chat_reply(&self, message: &str) -> String {
        match self.complete(message).await {
            Ok(body) => body,
            Err(e) => {
                let (kind, hint) = classify_upstream_error(&e);
                tracing::warn!(error_type = kind, "Upstream call failed: {} ({})", e, hint);
                format!("Error: {}", e)
            }
        }
    }
}
