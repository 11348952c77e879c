//! Question API - 题目、点赞、收藏、浏览与评论

use serde::Serialize;

use super::PageQuery;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 点赞目标类型：题目
pub const QUESTION_TARGET_TYPE: i32 = 0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeForm {
    target_id: i64,
    target_type: i32,
    user_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectForm {
    question_id: i64,
    user_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentForm<'a> {
    question_id: i64,
    content: &'a str,
    parent_id: Option<i64>,
    user_id: i64,
}

/// 题目相关接口
#[derive(Clone)]
pub struct QuestionApi {
    client: ApiClient,
}

impl QuestionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn query_one(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/question/queryOne").query("id", id))
            .await
    }

    pub async fn query_page(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/question/queryPage")))
            .await
    }

    /// 新增题目，题目字段由调用方组装
    pub async fn add<T: Serialize + ?Sized>(&self, question: &T) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::post("/question/add").json(question))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::delete("/question/delete").query("id", id))
            .await
    }

    pub async fn like(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.post_like("/likes", id).await
    }

    pub async fn unlike(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.post_like("/likes/unlike", id).await
    }

    async fn post_like(&self, path: &str, id: i64) -> Result<Envelope, ApiClientError> {
        let form = LikeForm {
            target_id: id,
            target_type: QUESTION_TARGET_TYPE,
            user_id: self.client.current_user_id()?,
        };
        self.client
            .execute(ApiRequest::post(path).json(&form))
            .await
    }

    pub async fn like_count(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(
                ApiRequest::get("/likes/count")
                    .query("targetId", id)
                    .query("targetType", QUESTION_TARGET_TYPE),
            )
            .await
    }

    pub async fn has_like(&self, id: i64) -> Result<Envelope, ApiClientError> {
        let user_id = self.client.current_user_id()?;
        self.client
            .execute(
                ApiRequest::get("/likes/hasLike")
                    .query("targetId", id)
                    .query("targetType", QUESTION_TARGET_TYPE)
                    .query("userId", user_id),
            )
            .await
    }

    pub async fn collect(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.post_collect("/collect", id).await
    }

    pub async fn un_collect(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.post_collect("/collect/unCollect", id).await
    }

    async fn post_collect(&self, path: &str, id: i64) -> Result<Envelope, ApiClientError> {
        let form = CollectForm {
            question_id: id,
            user_id: self.client.current_user_id()?,
        };
        self.client
            .execute(ApiRequest::post(path).json(&form))
            .await
    }

    pub async fn collect_count(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/collect/get/count").query("questionId", id))
            .await
    }

    pub async fn has_collect(&self, id: i64) -> Result<Envelope, ApiClientError> {
        let user_id = self.client.current_user_id()?;
        self.client
            .execute(
                ApiRequest::get("/collect/hasCollect")
                    .query("questionId", id)
                    .query("userId", user_id),
            )
            .await
    }

    /// 浏览量 +1
    pub async fn increase_view(&self, question_id: i64, user_id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(
                ApiRequest::get("/question/view/increase")
                    .query("questionId", question_id)
                    .query("userId", user_id),
            )
            .await
    }

    pub async fn view_history(&self, user_id: i64, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/question/view/history")).query("userId", user_id))
            .await
    }

    pub async fn comments(&self, question_id: i64, page: PageQuery) -> Result<Envelope, ApiClientError> {
        let request = ApiRequest::get("/comment/list").query("questionId", question_id);
        self.client.execute(page.apply(request)).await
    }

    pub async fn add_comment(
        &self,
        question_id: i64,
        content: &str,
        parent_id: Option<i64>,
    ) -> Result<Envelope, ApiClientError> {
        let form = CommentForm {
            question_id,
            content,
            parent_id,
            user_id: self.client.current_user_id()?,
        };
        self.client
            .execute(ApiRequest::post("/comment/add").json(&form))
            .await
    }
}
