use crate::core::models::RelayConfig;
use crate::core::traits::ChatService;
use crate::error::UpstreamError;
use crate::proxy::OpenAiClient;
use std::sync::Arc;

/// Web 应用状态
///
/// Read-only after startup; shared across request tasks without locking.
pub struct AppState {
    pub chat_service: Arc<dyn ChatService>,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self, UpstreamError> {
        let client = OpenAiClient::new(config)?;
        tracing::info!("Upstream completion endpoint: {}", client.completions_url());

        Ok(Self {
            chat_service: Arc::new(client),
        })
    }

    /// 使用自定义的聊天服务 (测试替身等)
    pub fn with_service(chat_service: Arc<dyn ChatService>) -> Self {
        Self { chat_service }
    }
}
