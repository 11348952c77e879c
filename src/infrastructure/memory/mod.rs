//! Memory Layer - In-Memory Adapters
//!
//! 实现 SessionStorePort 的内存版本

mod session_store;

pub use session_store::InMemorySessionStore;
