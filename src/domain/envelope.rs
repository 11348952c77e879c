//! Response Envelope - 后端统一响应格式
//!
//! 所有后端接口均返回 `{"code": <int>, "msg": <string>, "data": <any>}`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 业务码定义
pub mod code {
    pub const SUCCESS: i64 = 200;
    pub const UNAUTHORIZED: i64 = 401;
}

/// 统一响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// 信封分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeOutcome {
    /// code == 200
    Success,
    /// code == 401，会话失效
    SessionExpired,
    /// 其他任意业务码
    Failure,
}

impl Envelope {
    pub fn new(code: i64, msg: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            msg: Some(msg.into()),
            data,
        }
    }

    /// 从响应体解析信封
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn outcome(&self) -> EnvelopeOutcome {
        match self.code {
            code::SUCCESS => EnvelopeOutcome::Success,
            code::UNAUTHORIZED => EnvelopeOutcome::SessionExpired,
            _ => EnvelopeOutcome::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == EnvelopeOutcome::Success
    }

    /// 返回 msg，空字符串或缺失时使用默认文案
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.msg.as_deref() {
            Some(msg) if !msg.trim().is_empty() => msg,
            _ => default,
        }
    }

    /// 将 data 反序列化为具体类型
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}
