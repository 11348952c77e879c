//! Mock Interview API

use serde::Serialize;

use super::PageQuery;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 创建模拟面试的参数
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMockInterview {
    pub work_experience: String,
    pub job_position: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
struct InterviewEvent<'a> {
    id: i64,
    event: &'a str,
    content: &'a str,
}

#[derive(Clone)]
pub struct MockInterviewApi {
    client: ApiClient,
}

impl MockInterviewApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, interview: &NewMockInterview) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::post("/mock_interview/create").json(interview))
            .await
    }

    pub async fn query_page(&self, page: PageQuery) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(page.apply(ApiRequest::get("/mock_interview/query/page")))
            .await
    }

    /// 推进面试流程，event 如 start / chat / end，由后端解释
    pub async fn handle_event(&self, id: i64, event: &str, content: &str) -> Result<Envelope, ApiClientError> {
        let body = InterviewEvent { id, event, content };
        self.client
            .execute(ApiRequest::post("/mock_interview/handle/event").json(&body))
            .await
    }

    pub async fn query_one(&self, id: i64) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/mock_interview/queryOne").query("id", id))
            .await
    }
}
