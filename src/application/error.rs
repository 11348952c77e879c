//! 应用层错误定义
//!
//! 每次调用只会以下列其中一种错误结束

use thiserror::Error;

use crate::application::ports::{StoreError, TransportError};
use crate::domain::Envelope;

/// ApiClient 调用错误
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// code == 401，本地会话已清除并跳转登录页
    #[error("Not logged in or session expired: {message}")]
    SessionExpired { message: String },

    /// 其他业务码，携带原始信封
    #[error("Request failed with code {}", .0.code)]
    Application(Envelope),

    /// 网络错误、超时、响应格式错误
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 本地会话存储读写失败（未发出网络请求）
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    /// 请求无法构造（未发出网络请求）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 需要当前用户信息但本地没有登录记录（未发出网络请求）
    #[error("Not logged in")]
    NotLoggedIn,

    /// 成功响应的 data 结构不符合预期
    #[error("Unexpected response data: {0}")]
    UnexpectedData(String),
}

impl ApiClientError {
    /// 创建请求构造错误
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// 创建数据结构错误
    pub fn unexpected_data(message: impl Into<String>) -> Self {
        Self::UnexpectedData(message.into())
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// 业务错误对应的原始信封
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Self::Application(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// 错误类别（日志字段）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionExpired { .. } => "session_expired",
            Self::Application(_) => "application",
            Self::Transport(_) => "transport",
            Self::Store(_) => "store",
            Self::InvalidRequest(_) => "invalid_request",
            Self::NotLoggedIn => "not_logged_in",
            Self::UnexpectedData(_) => "unexpected_data",
        }
    }
}
