//! 路由守卫元数据

/// 登录页路径
pub const LOGIN_PATH: &str = "/login";

/// 登录后首页路径
pub const HOME_PATH: &str = "/home";

/// 目标路由的访问要求
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// 需要登录
    pub requires_auth: bool,
    /// 需要管理员角色
    pub requires_admin: bool,
}

impl RouteMeta {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            requires_admin: false,
        }
    }

    pub fn admin() -> Self {
        Self {
            requires_auth: true,
            requires_admin: true,
        }
    }
}
