//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod events;
pub mod memory;
pub mod persistence;

pub use adapters::{HttpTransportConfig, ReqwestTransport};
pub use events::{BroadcastNotifier, WatchNavigator};
pub use memory::InMemorySessionStore;
pub use persistence::sled::{SledSessionStore, SledStoreConfig};
