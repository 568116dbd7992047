// 错误分类模块 - 为日志给上游错误打标签
use crate::error::UpstreamError;

/// 返回值: (错误类型, 英文说明)
/// - 错误类型: 用于日志字段
/// - 英文说明: 便于排查的提示
pub fn classify_upstream_error(error: &UpstreamError) -> (&'static str, &'static str) {
    match error {
        UpstreamError::Client(_) => (
            "client_error",
            "HTTP client could not be built, check the proxy settings",
        ),
        UpstreamError::Status { status, .. } if status.as_u16() == 401 => (
            "auth_error",
            "Upstream rejected the API key",
        ),
        UpstreamError::Status { status, .. } if status.as_u16() == 429 => (
            "rate_limited",
            "Upstream rate limit or quota exceeded",
        ),
        UpstreamError::Status { status, .. } if status.is_server_error() => (
            "upstream_unavailable",
            "Upstream returned a server error",
        ),
        UpstreamError::Status { .. } => ("status_error", "Upstream rejected the request"),
        UpstreamError::Transport(e) if e.is_timeout() => (
            "timeout_error",
            "Request timeout, please check your network connection",
        ),
        UpstreamError::Transport(e) if e.is_connect() => (
            "connection_error",
            "Connection failed, please check your network or proxy settings",
        ),
        UpstreamError::Transport(e) if e.is_decode() => (
            "decode_error",
            "Response body could not be decoded",
        ),
        UpstreamError::Transport(e) if e.is_body() => (
            "body_error",
            "Response body transmission interrupted",
        ),
        UpstreamError::Transport(_) => ("unknown_error", "Unknown error occurred"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status(code: StatusCode) -> UpstreamError {
        UpstreamError::Status {
            status: code,
            url: "http://localhost/chat/completions".to_string(),
        }
    }

    #[test]
    fn test_classify_status_errors() {
        assert_eq!(classify_upstream_error(&status(StatusCode::UNAUTHORIZED)).0, "auth_error");
        assert_eq!(
            classify_upstream_error(&status(StatusCode::TOO_MANY_REQUESTS)).0,
            "rate_limited"
        );
        assert_eq!(
            classify_upstream_error(&status(StatusCode::BAD_GATEWAY)).0,
            "upstream_unavailable"
        );
        assert_eq!(classify_upstream_error(&status(StatusCode::BAD_REQUEST)).0, "status_error");
    }

    #[test]
    fn test_classify_client_error() {
        let err = UpstreamError::Client("bad proxy".to_string());
        assert_eq!(classify_upstream_error(&err).0, "client_error");
    }

    #[tokio::test]
    async fn test_classify_connection_refused() {
        // 端口 1 上没有监听
        let err = reqwest::Client::new()
            .post("http://127.0.0.1:1/chat/completions")
            .send()
            .await
            .unwrap_err();
        let (kind, _) = classify_upstream_error(&UpstreamError::Transport(err));
        assert_eq!(kind, "connection_error");
    }
}
