//! Session-Aware API Client - 所有业务请求的唯一出口
//!
//! 出站：读取本地凭证，按保存的请求头名称注入
//! 入站：解析 `{code, msg, data}` 信封
//! - 200: 返回完整信封
//! - 401: 清除本地会话、提示、跳转登录页
//! - 其他: 提示 msg 并返回原始信封作为错误
//! - 传输失败: 提示网络错误

use std::sync::Arc;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use uuid::Uuid;

use crate::application::error::ApiClientError;
use crate::application::ports::{
    HttpTransportPort, NavigatorPort, Notification, NotifierPort, OutboundRequest, RawResponse,
    RequestBody, SessionStorePort, StoreError, TransportError,
};
use crate::application::request::ApiRequest;
use crate::application::session::SessionService;
use crate::domain::{Envelope, EnvelopeOutcome, LOGIN_PATH};

/// 默认提示文案
pub mod messages {
    pub const SESSION_EXPIRED: &str = "session expired, please log in again";
    pub const REQUEST_FAILED: &str = "request failed";
    pub const NETWORK_FAILED: &str = "network request failed, please try again later";
    pub const LOGIN_REQUIRED: &str = "please log in first";
}

/// 错误信息中保留的响应体长度
const BODY_SNIPPET_CHARS: usize = 200;

/// ApiClient 配置
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// 所有接口路径的前缀
    pub base_path: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

/// 会话感知的 API 客户端
///
/// 创建后配置不可变，clone 开销很小，所有调用方共享同一实例
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiClientConfig>,
    transport: Arc<dyn HttpTransportPort>,
    session: SessionService,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ApiClient {
    pub fn new(
        config: ApiClientConfig,
        transport: Arc<dyn HttpTransportPort>,
        store: Arc<dyn SessionStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            session: SessionService::new(store),
            navigator,
            notifier,
        }
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn NavigatorPort> {
        &self.navigator
    }

    pub fn notifier(&self) -> &Arc<dyn NotifierPort> {
        &self.notifier
    }

    /// 当前登录用户 id，供需要 userId 参数的接口使用
    ///
    /// 本地没有用户资料时直接失败，不发出网络请求
    pub fn current_user_id(&self) -> Result<i64, ApiClientError> {
        match self.session.current_user_id() {
            Ok(Some(id)) => Ok(id),
            Ok(None) => {
                tracing::warn!("Current user required but no profile is stored");
                self.notifier
                    .notify(Notification::error(messages::LOGIN_REQUIRED));
                Err(ApiClientError::NotLoggedIn)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stored profile");
                self.notifier
                    .notify(Notification::error(messages::REQUEST_FAILED));
                Err(ApiClientError::Store(e))
            }
        }
    }

    /// 调用成功后写本地会话失败：提示一次并返回 Store 错误
    pub(crate) fn reject_store(&self, error: StoreError) -> ApiClientError {
        tracing::error!(error = %error, "Failed to persist session");
        self.notifier
            .notify(Notification::error(messages::REQUEST_FAILED));
        ApiClientError::Store(error)
    }

    /// 成功响应的 data 不符合预期：提示一次并返回 UnexpectedData
    pub(crate) fn reject_data(&self, context: &str, reason: impl std::fmt::Display) -> ApiClientError {
        tracing::warn!(context = %context, reason = %reason, "Unexpected response data");
        self.notifier
            .notify(Notification::error(messages::REQUEST_FAILED));
        ApiClientError::unexpected_data(format!("{}: {}", context, reason))
    }

    /// 执行一次调用
    ///
    /// 成功时返回完整信封（调用方自行读取 `data`），
    /// 每次调用最多产生一次提示、一次存储变更和一次跳转
    pub async fn execute(&self, request: ApiRequest) -> Result<Envelope, ApiClientError> {
        let request_id = Uuid::new_v4();
        let method = request.method.clone();
        let path = request.path.clone();

        let outbound = match self.prepare(request_id, request) {
            Ok(outbound) => outbound,
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    error = %e,
                    "Request rejected before dispatch"
                );
                self.notifier
                    .notify(Notification::error(messages::REQUEST_FAILED));
                return Err(e);
            }
        };

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %outbound.path,
            headers = outbound.headers.len(),
            "Dispatching request"
        );

        let result = self.transport.send(outbound).await;
        self.settle(request_id, &method, &path, result)
    }

    /// 出站处理：拼接 base path 并注入凭证
    fn prepare(
        &self,
        request_id: Uuid,
        request: ApiRequest,
    ) -> Result<OutboundRequest, ApiClientError> {
        if let Some(reason) = request.body_error {
            return Err(ApiClientError::InvalidRequest(reason));
        }
        if let RequestBody::Multipart(part) = &request.body {
            if let Some(content_type) = &part.content_type {
                validate_content_type(content_type)?;
            }
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        if let Some(credential) = self.session.credential()? {
            let (name, value) = parse_header(&credential.header_name, &credential.header_value)
                .map_err(|e| {
                    ApiClientError::invalid_request(format!("stored credential: {}", e))
                })?;
            headers.insert(name, value);
        }

        Ok(OutboundRequest {
            request_id,
            method: request.method,
            path: self.full_path(&request.path),
            query: request.query,
            headers,
            body: request.body,
        })
    }

    fn full_path(&self, path: &str) -> String {
        let base = self.config.base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// 入站处理
    fn settle(
        &self,
        request_id: Uuid,
        method: &Method,
        path: &str,
        result: Result<RawResponse, TransportError>,
    ) -> Result<Envelope, ApiClientError> {
        let response = match result {
            Ok(response) => response,
            Err(e) => return Err(self.reject_transport(request_id, method, path, e)),
        };

        let envelope = match Envelope::from_slice(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                let error = if response.is_success() {
                    TransportError::MalformedEnvelope(e.to_string())
                } else {
                    TransportError::HttpStatus {
                        status: response.status,
                        body: response.body_snippet(BODY_SNIPPET_CHARS),
                    }
                };
                return Err(self.reject_transport(request_id, method, path, error));
            }
        };

        match envelope.outcome() {
            EnvelopeOutcome::Success => {
                tracing::debug!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    "Request succeeded"
                );
                Ok(envelope)
            }
            EnvelopeOutcome::SessionExpired => {
                Err(self.expire_session(request_id, method, path, &envelope))
            }
            EnvelopeOutcome::Failure => {
                let message = envelope.message_or(messages::REQUEST_FAILED).to_string();
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    code = envelope.code,
                    msg = %message,
                    "Request failed"
                );
                self.notifier.notify(Notification::error(message));
                Err(ApiClientError::Application(envelope))
            }
        }
    }

    /// 会话失效：清除存储、提示、跳转登录页，不重试
    fn expire_session(
        &self,
        request_id: Uuid,
        method: &Method,
        path: &str,
        envelope: &Envelope,
    ) -> ApiClientError {
        let cleared = match self.session.clear() {
            Ok(cleared) => cleared,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "Failed to clear session store"
                );
                false
            }
        };

        let message = envelope.message_or(messages::SESSION_EXPIRED).to_string();
        self.notifier.notify(Notification::error(message.clone()));
        let navigated = self.navigator.go_to(LOGIN_PATH);

        tracing::warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            cleared = cleared,
            navigated = navigated,
            "Session expired"
        );

        ApiClientError::SessionExpired { message }
    }

    fn reject_transport(
        &self,
        request_id: Uuid,
        method: &Method,
        path: &str,
        error: TransportError,
    ) -> ApiClientError {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            error = %error,
            "Request transport failure"
        );
        // 请求在发送前被传输层拒绝时不是网络问题
        let message = match &error {
            TransportError::InvalidRequest(_) => messages::REQUEST_FAILED,
            _ => messages::NETWORK_FAILED,
        };
        self.notifier.notify(Notification::error(message));
        ApiClientError::Transport(error)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ApiClientError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ApiClientError::invalid_request(format!("header name '{}': {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| ApiClientError::invalid_request(format!("header '{}' value: {}", name, e)))?;
    Ok((header_name, header_value))
}

/// 检查 `type/subtype[; params]` 形式的 MIME 类型
fn validate_content_type(content_type: &str) -> Result<(), ApiClientError> {
    let is_token = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&^_.+-".contains(c))
    };
    let essence = content_type.split(';').next().unwrap_or("").trim();
    let valid = HeaderValue::from_str(content_type).is_ok()
        && matches!(essence.split_once('/'), Some((ty, sub)) if is_token(ty) && is_token(sub));
    if valid {
        Ok(())
    } else {
        Err(ApiClientError::invalid_request(format!(
            "file content type '{}'",
            content_type
        )))
    }
}
