use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

pub const NO_MESSAGE_REPLY: &str = "No message provided.";

/// 聊天请求
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// 聊天响应, 成功和失败共用同一结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatRequest {
    /// 缺失或全空白的消息视为无效
    fn validated_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

/// `POST /api/chat`
///
/// Upstream failures are still answered with 200; the reply then carries the
/// `"Error: ..."` text produced by the chat service.
pub async fn submit_chat_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let Some(message) = req.validated_message() else {
        tracing::debug!("Rejected chat request without a message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatReply {
                reply: NO_MESSAGE_REPLY.to_string(),
            }),
        )
            .into_response();
    };

    let reply = state.chat_service.get_chat_reply(message).await;
    (StatusCode::OK, Json(ChatReply { reply })).into_response()
}
