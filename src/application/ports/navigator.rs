//! Navigator Port - 页面跳转抽象

/// Navigator Port
///
/// 跳转到当前所在路径是空操作，多个并发的会话失效只会产生一次有效跳转
pub trait NavigatorPort: Send + Sync {
    /// 跳转到指定路径，返回是否实际发生了跳转
    fn go_to(&self, path: &str) -> bool;

    /// 当前路径
    fn current_path(&self) -> Option<String>;
}
