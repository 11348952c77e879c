//! Session Store Port - 会话持久化存储抽象
//!
//! 进程级的持久化键值存储，登录时写入、每次请求读取、登出或会话失效时删除。
//! 具体实现在 infrastructure/persistence (sled) 与 infrastructure/memory 层

use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Corrupted entry '{key}': {reason}")]
    Corrupted { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Session Store Port
///
/// 每个写操作都是单键原子的；`clear` 对一组键整体原子
pub trait SessionStorePort: Send + Sync {
    /// 读取键值
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入键值
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// 删除单个键，返回键是否存在
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// 删除一组键，返回实际删除的数量（全部不存在时为 0）
    fn clear(&self, keys: &[&str]) -> Result<usize, StoreError>;
}
