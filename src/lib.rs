//! qbank - 题库 / 模拟面试平台的会话感知客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Envelope: 统一响应信封 `{code, msg, data}`
//! - Session: 登录凭证、用户资料、会话状态
//! - Route: 跳转守卫元数据
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SessionStore, HttpTransport, Navigator, Notifier）
//! - ApiClient: 凭证注入、信封解析、会话失效处理
//! - AuthService / RouteGuard / 业务 API 模块
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: reqwest HTTP 传输
//! - Persistence: Sled 会话存储
//! - Memory: DashMap 会话存储
//! - Events: watch 导航器、broadcast 通知

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
