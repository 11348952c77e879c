//! Comment API - 根评论与楼中楼回复

use serde::Serialize;

use super::PageQuery;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 发布评论；根评论的 parent_id / root_id 为 None，序列化为 null
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub user_id: i64,
    pub target_id: i64,
    pub parent_id: Option<i64>,
    pub root_id: Option<i64>,
}

impl NewComment {
    pub fn root(user_id: i64, target_id: i64, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user_id,
            target_id,
            parent_id: None,
            root_id: None,
        }
    }

    pub fn reply_to(mut self, parent_id: i64, root_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self.root_id = Some(root_id);
        self
    }
}

#[derive(Clone)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn publish(&self, comment: &NewComment) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::post("/comment/publish").json(comment))
            .await
    }

    /// 分页查询根评论
    pub async fn query_by_page(&self, target_id: i64, page: PageQuery) -> Result<Envelope, ApiClientError> {
        let request = ApiRequest::get("/comment/queryByPage").query("targetId", target_id);
        self.client.execute(page.apply(request)).await
    }

    pub async fn query_replies(&self, comment_id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/comment/queryReplyComment").query("commentId", comment_id))
            .await
    }

    /// 后端删除接口使用 GET
    pub async fn delete(&self, comment_id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/comment/delete").query("commentId", comment_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{json_body, query_pairs, Harness, ScriptedTransport};
    use http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_publish_root_comment_sends_nulls() {
        let h = Harness::new(ScriptedTransport::always_ok());
        CommentApi::new(h.client.clone())
            .publish(&NewComment::root(1, 42, "first"))
            .await
            .unwrap();

        assert_eq!(
            json_body(&h.transport.last()),
            json!({"content": "first", "userId": 1, "targetId": 42, "parentId": null, "rootId": null})
        );
    }

    #[tokio::test]
    async fn test_publish_reply() {
        let h = Harness::new(ScriptedTransport::always_ok());
        let reply = NewComment::root(1, 42, "agreed").reply_to(7, 5);
        CommentApi::new(h.client.clone()).publish(&reply).await.unwrap();

        let body = json_body(&h.transport.last());
        assert_eq!(body["parentId"], 7);
        assert_eq!(body["rootId"], 5);
    }

    #[tokio::test]
    async fn test_query_by_page_and_delete() {
        let h = Harness::new(ScriptedTransport::always_ok());
        let api = CommentApi::new(h.client.clone());
        api.query_by_page(42, PageQuery::default()).await.unwrap();
        api.delete(8).await.unwrap();

        let seen = h.transport.seen();
        assert_eq!(
            query_pairs(&seen[0]),
            vec![("targetId", "42"), ("page", "1"), ("pageSize", "10")]
        );
        assert_eq!(seen[1].method, Method::GET);
        assert_eq!(seen[1].path, "/api/comment/delete");
        assert_eq!(query_pairs(&seen[1]), vec![("commentId", "8")]);
    }
}
