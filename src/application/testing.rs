//! 测试替身：脚本化传输层、故障存储与组装好的客户端

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::client::{ApiClient, ApiClientConfig};
use crate::application::ports::{
    HttpTransportPort, OutboundRequest, RawResponse, RequestBody, SessionStorePort, StoreError,
    TransportError,
};
use crate::application::session::keys;
use crate::domain::Credential;
use crate::infrastructure::events::{BroadcastNotifier, WatchNavigator};
use crate::infrastructure::memory::InMemorySessionStore;

/// 按顺序返回预设响应并记录收到的请求；预设用完后返回 fallback
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    fallback: Option<RawResponse>,
    seen: Mutex<Vec<OutboundRequest>>,
    delay: Duration,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<RawResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            fallback: None,
            seen: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn delayed(
        responses: Vec<Result<RawResponse, TransportError>>,
        delay: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            fallback: None,
            seen: Mutex::new(Vec::new()),
            delay,
        })
    }

    /// 所有请求都返回 `{"code":200,"msg":"ok","data":null}`
    pub fn always_ok() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Some(RawResponse::new(
                200,
                json!({"code": 200, "msg": "ok", "data": null}).to_string(),
            )),
            seen: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn json(status: u16, body: Value) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(status, body.to_string()))
    }

    pub fn seen(&self) -> Vec<OutboundRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> OutboundRequest {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransportPort for ScriptedTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let scripted = self.responses.lock().unwrap().pop_front();
        match (scripted, &self.fallback) {
            (Some(response), _) => response,
            (None, Some(fallback)) => Ok(fallback.clone()),
            (None, None) => Err(TransportError::NetworkError(
                "no scripted response".into(),
            )),
        }
    }
}

/// 所有操作都失败的存储
pub struct BrokenStore;

impl SessionStorePort for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("disk unavailable".into()))
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk unavailable".into()))
    }
    fn remove(&self, _key: &str) -> Result<bool, StoreError> {
        Err(StoreError::Backend("disk unavailable".into()))
    }
    fn clear(&self, _keys: &[&str]) -> Result<usize, StoreError> {
        Err(StoreError::Backend("disk unavailable".into()))
    }
}

/// 用内存适配器组装的客户端
pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<ScriptedTransport>,
    pub store: Arc<InMemorySessionStore>,
    pub navigator: Arc<WatchNavigator>,
    pub notifier: Arc<BroadcastNotifier>,
}

impl Harness {
    pub fn new(transport: Arc<ScriptedTransport>) -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        let navigator = Arc::new(WatchNavigator::new("/home"));
        let notifier = Arc::new(BroadcastNotifier::new());
        let client = ApiClient::new(
            ApiClientConfig::default(),
            transport.clone(),
            store.clone(),
            navigator.clone(),
            notifier.clone(),
        );
        Self {
            client,
            transport,
            store,
            navigator,
            notifier,
        }
    }

    /// 写入凭证 `token: abc` 与用户 alice (id 1)
    pub fn login(&self) {
        self.client
            .session()
            .save_credential(&Credential::new("token", "abc"))
            .unwrap();
        self.store
            .set(keys::USER_INFO, r#"{"id":1,"userAccount":"alice"}"#)
            .unwrap();
    }

    pub fn store_is_empty(&self) -> bool {
        keys::ALL
            .iter()
            .all(|key| self.store.get(key).unwrap().is_none())
    }
}

/// 取出 JSON 请求体
pub fn json_body(request: &OutboundRequest) -> Value {
    match &request.body {
        RequestBody::Json(value) => value.clone(),
        other => panic!("expected JSON body, got {:?}", other),
    }
}

/// 把查询参数转成便于断言的形式
pub fn query_pairs(request: &OutboundRequest) -> Vec<(&str, &str)> {
    request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}
