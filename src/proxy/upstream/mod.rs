// Upstream 模块 - 上游 API 客户端

pub mod client;

pub use client::OpenAiClient;
