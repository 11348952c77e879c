//! Events - 通知与导航的通道实现

mod navigator;
mod notifier;

pub use navigator::WatchNavigator;
pub use notifier::BroadcastNotifier;
