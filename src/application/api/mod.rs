//! 业务 API 模块 - 各接口的请求构造
//!
//! 只负责组装路径与参数，响应码的判断、提示和会话处理全部由 ApiClient 完成

mod chat;
mod comment;
mod file;
mod learning_path;
mod mock_interview;
mod question;
mod question_bank;
mod user;

pub use chat::ChatApi;
pub use comment::{CommentApi, NewComment};
pub use file::FileApi;
pub use learning_path::{LearningPath, LearningPathApi};
pub use mock_interview::{MockInterviewApi, NewMockInterview};
pub use question::{QuestionApi, QUESTION_TARGET_TYPE};
pub use question_bank::{NewQuestionBank, QuestionBankApi};
pub use user::UserApi;

use crate::application::request::ApiRequest;

/// 分页参数，默认第 1 页、每页 10 条
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub(crate) fn apply(self, request: ApiRequest) -> ApiRequest {
        request
            .query("page", self.page)
            .query("pageSize", self.page_size)
    }
}
