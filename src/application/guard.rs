//! Route Guard - 跳转前的登录与权限检查
//!
//! 只负责判定，不关心路由表本身

use std::sync::Arc;

use crate::application::client::ApiClient;
use crate::application::ports::{NavigatorPort, Notification, NotifierPort, StoreError};
use crate::application::session::SessionService;
use crate::domain::{RouteMeta, LOGIN_PATH};

pub const ADMIN_REQUIRED: &str = "admin permission required";

/// 判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行
    Proceed,
    /// 未登录，清除残留会话后跳转登录页
    RedirectToLogin,
    /// 权限不足，停留在来源页
    Reject { stay_on: String },
}

#[derive(Clone)]
pub struct RouteGuard {
    session: SessionService,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl RouteGuard {
    pub fn new(
        session: SessionService,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
        }
    }

    /// 与客户端共享同一套存储、导航与通知
    pub fn from_client(client: &ApiClient) -> Self {
        Self::new(
            client.session().clone(),
            client.navigator().clone(),
            client.notifier().clone(),
        )
    }

    /// 纯判定，不产生副作用
    pub fn check(&self, from: &str, to: &str, meta: RouteMeta) -> Result<GuardDecision, StoreError> {
        if to == LOGIN_PATH {
            return Ok(GuardDecision::Proceed);
        }

        if meta.requires_auth && self.session.credential()?.is_none() {
            return Ok(GuardDecision::RedirectToLogin);
        }

        if meta.requires_admin {
            // 资料损坏按非管理员处理
            let is_admin = self
                .session
                .profile()
                .ok()
                .flatten()
                .is_some_and(|p| p.is_admin());
            if !is_admin {
                return Ok(GuardDecision::Reject {
                    stay_on: from.to_string(),
                });
            }
        }

        Ok(GuardDecision::Proceed)
    }

    /// 判定并执行跳转
    pub fn navigate(&self, from: &str, to: &str, meta: RouteMeta) -> Result<GuardDecision, StoreError> {
        let decision = self.check(from, to, meta)?;
        match &decision {
            GuardDecision::Proceed => {
                self.navigator.go_to(to);
            }
            GuardDecision::RedirectToLogin => {
                self.session.clear()?;
                tracing::info!(target_path = %to, "Navigation requires login");
                self.navigator.go_to(LOGIN_PATH);
            }
            GuardDecision::Reject { stay_on } => {
                tracing::warn!(target_path = %to, "Navigation requires admin role");
                self.notifier.notify(Notification::error(ADMIN_REQUIRED));
                self.navigator.go_to(stay_on);
            }
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SessionStorePort;
    use crate::application::session::keys;
    use crate::application::testing::{Harness, ScriptedTransport};

    fn guard(h: &Harness) -> RouteGuard {
        RouteGuard::from_client(&h.client)
    }

    #[test]
    fn test_login_page_always_proceeds() {
        let h = Harness::new(ScriptedTransport::always_ok());
        let decision = guard(&h)
            .check("/home", LOGIN_PATH, RouteMeta::admin())
            .unwrap();
        assert_eq!(decision, GuardDecision::Proceed);
    }

    #[test]
    fn test_public_route_proceeds_without_session() {
        let h = Harness::new(ScriptedTransport::always_ok());
        let decision = guard(&h)
            .check("/home", "/about", RouteMeta::public())
            .unwrap();
        assert_eq!(decision, GuardDecision::Proceed);
    }

    #[test]
    fn test_unauthenticated_redirects_and_clears_stale_profile() {
        let h = Harness::new(ScriptedTransport::always_ok());
        h.store.set(keys::USER_INFO, r#"{"id":1}"#).unwrap();

        let decision = guard(&h)
            .navigate("/home", "/profile", RouteMeta::authenticated())
            .unwrap();

        assert_eq!(decision, GuardDecision::RedirectToLogin);
        assert!(h.store_is_empty());
        assert_eq!(h.navigator.current_path().as_deref(), Some(LOGIN_PATH));
    }

    #[test]
    fn test_non_admin_stays_on_previous_page() {
        let h = Harness::new(ScriptedTransport::always_ok());
        h.login();
        let mut rx = h.notifier.subscribe();

        let decision = guard(&h)
            .navigate("/home", "/admin/questions", RouteMeta::admin())
            .unwrap();

        assert_eq!(
            decision,
            GuardDecision::Reject {
                stay_on: "/home".to_string()
            }
        );
        assert_eq!(rx.try_recv().unwrap().message, ADMIN_REQUIRED);
        assert_eq!(h.navigator.current_path().as_deref(), Some("/home"));
        assert_eq!(h.navigator.navigations(), 0);
    }

    #[test]
    fn test_admin_proceeds() {
        let h = Harness::new(ScriptedTransport::always_ok());
        h.login();
        h.store
            .set(keys::USER_INFO, r#"{"id":1,"userRole":1}"#)
            .unwrap();

        let decision = guard(&h)
            .navigate("/home", "/admin/questions", RouteMeta::admin())
            .unwrap();

        assert_eq!(decision, GuardDecision::Proceed);
        assert_eq!(
            h.navigator.current_path().as_deref(),
            Some("/admin/questions")
        );
    }

    #[test]
    fn test_corrupted_profile_is_not_admin() {
        let h = Harness::new(ScriptedTransport::always_ok());
        h.login();
        h.store.set(keys::USER_INFO, "{broken").unwrap();

        let decision = guard(&h)
            .check("/home", "/admin", RouteMeta::admin())
            .unwrap();
        assert!(matches!(decision, GuardDecision::Reject { .. }));
    }
}
