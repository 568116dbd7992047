//! 核心 trait 定义
//! 用于解耦 HTTP 层与上游实现, 测试时可替换

use async_trait::async_trait;

/// 聊天回复服务
///
/// `get_chat_reply` never fails from the caller's point of view: upstream
/// failures come back as a string starting with `"Error: "`.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn get_chat_reply(&self, message: &str) -> String;
}
