//! Sled 持久化实现

mod session_store;

pub use session_store::{SledSessionStore, SledStoreConfig};
