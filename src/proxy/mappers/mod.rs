// Mappers 模块 - 请求构建与错误分类

pub mod error_classifier;
pub mod openai;
