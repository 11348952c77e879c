//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SessionStore、HttpTransport、Navigator、Notifier）
//! - client: 会话感知的 API 客户端，所有请求的唯一出口
//! - session / auth / guard: 会话视图、登录登出、跳转守卫
//! - api: 各业务模块的请求构造
//! - error: 应用层错误定义

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod guard;
pub mod ports;
pub mod request;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use api::{
    ChatApi, CommentApi, FileApi, LearningPath, LearningPathApi, MockInterviewApi, NewComment,
    NewMockInterview, NewQuestionBank, PageQuery, QuestionApi, QuestionBankApi, UserApi,
    QUESTION_TARGET_TYPE,
};
pub use auth::AuthService;
pub use client::{messages, ApiClient, ApiClientConfig};
pub use error::ApiClientError;
pub use guard::{GuardDecision, RouteGuard, ADMIN_REQUIRED};
pub use ports::{
    FilePart, HttpTransportPort, NavigatorPort, Notification, NotificationLevel, NotifierPort,
    OutboundRequest, RawResponse, RequestBody, SessionStorePort, StoreError, TransportError,
};
pub use request::ApiRequest;
pub use session::{keys, SessionService};
