//! Question Bank API

use serde::Serialize;

use super::PageQuery;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 新建题库
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewQuestionBank {
    pub title: String,
    pub description: String,
    pub picture: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BankQuestionLink {
    question_bank_id: i64,
    // 后端字段名就是 questId
    quest_id: i64,
}

#[derive(Clone)]
pub struct QuestionBankApi {
    client: ApiClient,
}

impl QuestionBankApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn query_page(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/questionBank/queryPage")))
            .await
    }

    /// 题库详情及其题目
    pub async fn query_one(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/questionBank/queryOne").query("id", id))
            .await
    }

    pub async fn bank_list(&self) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/questionBank/queryBankList"))
            .await
    }

    pub async fn add_question(&self, bank_id: i64, question_id: i64) -> Result<Envelope, ApiClientError> {
        let link = BankQuestionLink {
            question_bank_id: bank_id,
            quest_id: question_id,
        };
        self.client
            .execute(ApiRequest::post("/questionAndBank/addQuestion").json(&link))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::delete("/questionBank/delete").query("id", id))
            .await
    }

    pub async fn add(&self, bank: &NewQuestionBank) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::post("/questionBank/add").json(bank))
            .await
    }
}
