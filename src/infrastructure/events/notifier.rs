//! Broadcast Notifier Implementation
//!
//! 通知写入日志并广播给所有订阅者（界面层或 CLI 输出）

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::application::ports::{Notification, NotificationLevel, NotifierPort};

/// 通知广播器
pub struct BroadcastNotifier {
    channel: broadcast::Sender<Notification>,
    emitted: AtomicU64,
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            channel: tx,
            emitted: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅后续通知
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.channel.subscribe()
    }

    /// 已发出的通知总数
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierPort for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(text = %notification.message, "Notification")
            }
            _ => tracing::info!(text = %notification.message, "Notification"),
        }

        self.emitted.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.channel.send(notification) {
            tracing::debug!(error = %e, "Failed to publish notification (no receivers)");
        }
    }
}
