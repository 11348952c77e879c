//! Reqwest HTTP Transport - 通过 reqwest 访问后端
//!
//! 实现 HttpTransportPort trait
//!
//! 后端地址: {origin}{path}，例如 http://localhost:9000/api/user/me

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{
    HttpTransportPort, OutboundRequest, RawResponse, RequestBody, TransportError,
};

/// HTTP 传输配置
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// 后端源地址（协议 + 主机 + 端口）
    pub origin: String,
    /// 单次请求超时时间（毫秒）
    pub timeout_ms: u64,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:9000".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl HttpTransportConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Reqwest 传输实现
pub struct ReqwestTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl ReqwestTransport {
    /// 创建新的传输实例
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TransportError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Result<Self, TransportError> {
        Self::new(HttpTransportConfig::default())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.origin.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, TransportError> {
        let url = self.url(&request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = &file.content_type {
                    part = part
                        .mime_str(content_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                }
                builder.multipart(Form::new().part(file.field_name, part))
            }
        };

        tracing::debug!(
            request_id = %request.request_id,
            method = %request.method,
            url = %url,
            "Sending HTTP request"
        );

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_connect() {
                TransportError::ConnectError(e.to_string())
            } else {
                TransportError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::NetworkError(format!("Failed to read body: {}", e))
                }
            })?
            .to_vec();

        tracing::debug!(
            request_id = %request.request_id,
            status = status,
            body_len = body.len(),
            "HTTP response received"
        );

        Ok(RawResponse { status, body })
    }
}
