//! Finance chat relay
//!
//! Accepts `POST /api/chat`, forwards the message to the OpenAI chat
//! completion API behind a fixed finance-assistant system prompt, and hands
//! the upstream body back as `{"reply": ...}`.

pub mod api;
pub mod core;
pub mod error;
pub mod logger;
pub mod proxy;
pub mod state;
