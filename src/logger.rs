//! 日志初始化

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "finance-relay.log";

fn env_filter() -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
}

/// 按天滚动的日志文件, 目录不可用时返回错误
pub fn build_file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}

/// Installs the global subscriber: stdout always, plus a daily rolling file
/// when `log_dir` is set. The returned guard must outlive the server, dropping
/// it stops the background file writer.
pub fn init_logger(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, InitError> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(build_file_appender(dir)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = std::env::temp_dir().join(format!("finance-relay-logs-{}", std::process::id()));
        let result = build_file_appender(&dir);
        assert!(result.is_ok());
        assert!(dir.is_dir());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unusable_log_dir_is_an_error() {
        // 父路径是普通文件, 目录无法创建
        let file = std::env::temp_dir().join(format!("finance-relay-notadir-{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();

        let result = init_logger(Some(&file.join("logs")));
        std::fs::remove_file(&file).ok();

        assert!(result.is_err());
    }
}
