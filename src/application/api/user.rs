//! User API

use serde::Serialize;

use super::PageQuery;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountForm<'a> {
    user_account: &'a str,
    user_password: &'a str,
}

/// 用户相关接口
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 登录，成功时 data 为 `{tokenName, tokenValue}`
    pub async fn login(&self, account: &str, password: &str) -> Result<Envelope, ApiClientError> {
        let form = AccountForm {
            user_account: account,
            user_password: password,
        };
        self.client
            .execute(ApiRequest::post("/user/login").json(&form))
            .await
    }

    pub async fn register(&self, account: &str, password: &str) -> Result<Envelope, ApiClientError> {
        let form = AccountForm {
            user_account: account,
            user_password: password,
        };
        self.client
            .execute(ApiRequest::post("/user/register").json(&form))
            .await
    }

    /// 当前登录用户
    pub async fn me(&self) -> Result<Envelope, ApiClientError> {
        self.client.execute(ApiRequest::get("/user/me")).await
    }

    /// 某年的签到记录
    pub async fn sign_data(&self, year: i32) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/user/getSignData").query("year", year))
            .await
    }

    pub async fn sign(&self) -> Result<Envelope, ApiClientError> {
        self.client.execute(ApiRequest::get("/user/sign")).await
    }

    pub async fn query_page(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/user/queryPage")))
            .await
    }

    /// 当前用户收藏的题目
    pub async fn collected_questions(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        let user_id = self.client.current_user_id()?;
        self.client
            .execute(page.apply(ApiRequest::get("/collect/getCollectList")).query("userId", user_id))
            .await
    }

    pub async fn viewed_questions(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/user/viewed")))
            .await
    }
}
