//! 核心模块
//! 配置模型、配置加载与服务 trait

pub mod models;
pub mod storage;
pub mod traits;

// 重导出常用类型
pub use traits::ChatService;
