//! Watch-channel Navigator Implementation
//!
//! 当前路径保存在 watch 通道里，界面层订阅变化；
//! 跳转到当前路径不会产生变更

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::application::ports::NavigatorPort;

/// 路由导航器
pub struct WatchNavigator {
    current: watch::Sender<String>,
    navigations: AtomicU64,
}

impl WatchNavigator {
    pub fn new(initial_path: &str) -> Self {
        let (tx, _) = watch::channel(initial_path.to_string());
        Self {
            current: tx,
            navigations: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅路径变化
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }

    /// 实际发生的跳转次数
    pub fn navigations(&self) -> u64 {
        self.navigations.load(Ordering::Relaxed)
    }
}

impl NavigatorPort for WatchNavigator {
    fn go_to(&self, path: &str) -> bool {
        let changed = self.current.send_if_modified(|current| {
            if current == path {
                false
            } else {
                *current = path.to_string();
                true
            }
        });

        if changed {
            self.navigations.fetch_add(1, Ordering::Relaxed);
            tracing::info!(path = %path, "Navigated");
        } else {
            tracing::debug!(path = %path, "Already on path, navigation skipped");
        }
        changed
    }

    fn current_path(&self) -> Option<String> {
        Some(self.current.borrow().clone())
    }
}
