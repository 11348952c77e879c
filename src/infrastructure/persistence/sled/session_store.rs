//! Sled-based Durable Session Store Implementation
//!
//! 会话键保存在独立的 tree 中，重启后仍然有效

use sled::transaction::{ConflictableTransactionResult, TransactionError};
use sled::{Db, Tree};
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{SessionStorePort, StoreError};

/// 会话数据所在的 tree
const SESSION_TREE: &str = "session";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/session.sled".to_string(),
        }
    }
}

/// Sled 会话存储
pub struct SledSessionStore {
    db: Db,
    tree: Tree,
}

impl SledSessionStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path).map_err(|e| StoreError::Backend(e.to_string()))?;
        let tree = db
            .open_tree(SESSION_TREE)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = tree.len(),
            "SledSessionStore initialized"
        );

        Ok(Self { db, tree })
    }

    /// 打开指定路径的存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn decode(key: &str, bytes: &[u8]) -> Result<String, StoreError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| StoreError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

impl SessionStorePort for SledSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.tree.get(key) {
            Ok(Some(data)) => Self::decode(key, &data).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.tree
            .insert(key, value.as_bytes())
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let existed = self
            .tree
            .remove(key)
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .is_some();
        self.flush()?;
        Ok(existed)
    }

    fn clear(&self, keys: &[&str]) -> Result<usize, StoreError> {
        // 单个事务内删除，其他读者不会看到只删了一半的会话
        let removed = self
            .tree
            .transaction(|tx| -> ConflictableTransactionResult<usize, ()> {
                let mut removed = 0;
                for key in keys {
                    if tx.remove(*key)?.is_some() {
                        removed += 1;
                    }
                }
                Ok(removed)
            })
            .map_err(|e| match e {
                TransactionError::Abort(()) => {
                    StoreError::Backend("session clear transaction aborted".to_string())
                }
                TransactionError::Storage(err) => StoreError::Backend(err.to_string()),
            })?;

        self.flush()?;
        tracing::debug!(removed = removed, "Sled session keys cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_set_get_remove() {
        let dir = tempdir().unwrap();
        let store = SledSessionStore::open(dir.path().join("session.sled")).unwrap();

        store.set("tokenName", "satoken").unwrap();
        assert_eq!(store.get("tokenName").unwrap().as_deref(), Some("satoken"));
        assert!(store.get("missing").unwrap().is_none());

        assert!(store.remove("tokenName").unwrap());
        assert!(!store.remove("tokenName").unwrap());
    }

    #[test]
    fn test_clear_counts_removed_keys() {
        let dir = tempdir().unwrap();
        let store = SledSessionStore::open(dir.path().join("session.sled")).unwrap();

        store.set("tokenName", "satoken").unwrap();
        store.set("tokenValue", "abc").unwrap();
        store.set("other", "keep").unwrap();

        let keys = ["tokenName", "tokenValue", "userInfo"];
        assert_eq!(store.clear(&keys).unwrap(), 2);
        assert_eq!(store.clear(&keys).unwrap(), 0);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("keep"));
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.sled");

        {
            let store = SledSessionStore::open(&path).unwrap();
            store.set("tokenValue", "persisted").unwrap();
        }

        let store = SledSessionStore::open(&path).unwrap();
        assert_eq!(
            store.get("tokenValue").unwrap().as_deref(),
            Some("persisted")
        );
    }
}
