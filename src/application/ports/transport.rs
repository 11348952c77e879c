//! HTTP Transport Port - 网络发送抽象
//!
//! 只负责把已准备好的请求发出去并取回原始响应；
//! 鉴权头注入与信封解析都在 ApiClient 中完成

use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Cannot connect to backend: {0}")]
    ConnectError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// 上传文件
#[derive(Debug, Clone)]
pub struct FilePart {
    /// 表单字段名
    pub field_name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field_name: "file".to_string(),
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// 请求体
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(FilePart),
}

/// 已完成出站处理的请求
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// 追踪 ID
    pub request_id: Uuid,
    pub method: Method,
    /// 含 base path 的完整路径，例如 `/api/user/me`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// 原始响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 响应体前若干字符，用于日志和错误信息
    pub fn body_snippet(&self, max_chars: usize) -> String {
        String::from_utf8_lossy(&self.body)
            .chars()
            .take(max_chars)
            .collect()
    }
}

/// HTTP Transport Port
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    /// 发送请求；超时、连接失败等返回 TransportError，
    /// 非 2xx 状态码不视为错误，交由调用方判断
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, TransportError>;
}
