// OpenAI mapper 模块

pub mod models;
pub mod request;

pub use models::*;
pub use request::*;
