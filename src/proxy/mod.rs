// proxy 模块 - 上游转发

pub mod mappers; // 请求构建
pub mod upstream; // 上游客户端

pub use upstream::OpenAiClient;
