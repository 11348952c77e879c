//! 领域层 - 纯数据类型，不依赖任何 IO
//!
//! - envelope: 后端统一响应信封 `{code, msg, data}`
//! - session: 登录凭证、用户资料与会话状态
//! - route: 路由守卫使用的元数据

pub mod envelope;
pub mod route;
pub mod session;

pub use envelope::{code, Envelope, EnvelopeOutcome};
pub use route::{RouteMeta, HOME_PATH, LOGIN_PATH};
pub use session::{Credential, SessionState, UserProfile, ADMIN_ROLE};
