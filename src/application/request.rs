//! Outbound Request Descriptor - 单次调用的请求描述
//!
//! 由各业务 API 模块构造，交给 ApiClient 消费一次

use http::Method;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{FilePart, RequestBody};

/// 请求描述
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    /// 相对 base path 的路径
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: RequestBody,
    /// 请求体序列化失败的原因，由 ApiClient 在发送前统一处理
    pub(crate) body_error: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            body_error: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// 追加查询参数
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// 追加可选查询参数，None 时跳过
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// 覆盖请求头；与登录凭证同名时以凭证为准
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// JSON 请求体；序列化失败时在 `execute` 中以 InvalidRequest 拒绝
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = RequestBody::Json(value);
                self.body_error = None;
            }
            Err(e) => {
                self.body = RequestBody::Empty;
                self.body_error = Some(format!("body serialization: {}", e));
            }
        }
        self
    }

    pub fn json_value(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self.body_error = None;
        self
    }

    /// multipart 文件上传
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}
