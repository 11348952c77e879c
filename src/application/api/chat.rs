//! Chat API - AI 对话历史

use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 每次拉取的默认条数
pub const DEFAULT_HISTORY_SIZE: u32 = 10;

#[derive(Clone)]
pub struct ChatApi {
    client: ApiClient,
}

impl ChatApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 游标分页拉取历史，cursor 为 None 时从最新一条开始
    pub async fn history(
        &self,
        user_id: i64,
        cursor: Option<i64>,
        size: Option<u32>,
    ) -> Result<Envelope, ApiClientError> {
        let request = ApiRequest::get("/chat/getHistory")
            .query("userId", user_id)
            .query_opt("cursor", cursor)
            .query("size", size.unwrap_or(DEFAULT_HISTORY_SIZE));
        self.client.execute(request).await
    }

    pub async fn clear_history(&self, user_id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/chat/clearHistory").query("userId", user_id))
            .await
    }
}
