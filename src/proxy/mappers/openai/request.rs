// 用户消息 → OpenAI 请求
use super::models::{CompletionMessage, CompletionPayload};

pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant in the sector of finance and investments.";

/// Always exactly two messages: the fixed persona, then the caller's text.
pub fn build_completion_payload(message: &str) -> CompletionPayload {
    CompletionPayload {
        model: CHAT_MODEL.to_string(),
        messages: vec![
            CompletionMessage::system(SYSTEM_PROMPT),
            CompletionMessage::user(message),
        ],
    }
}
