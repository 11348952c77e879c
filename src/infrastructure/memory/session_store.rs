//! In-Memory Session Store Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{SessionStorePort, StoreError};

/// 内存会话存储（进程退出即丢失，主要用于测试和临时会话）
pub struct InMemorySessionStore {
    entries: DashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorePort for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.remove(key).is_some())
    }

    fn clear(&self, keys: &[&str]) -> Result<usize, StoreError> {
        let removed = keys
            .iter()
            .filter(|key| self.entries.remove(**key).is_some())
            .count();
        tracing::debug!(removed = removed, "In-memory session keys cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_lifecycle() {
        let store = InMemorySessionStore::new();

        // Set / Get
        store.set("tokenName", "token").unwrap();
        store.set("tokenValue", "abc").unwrap();
        assert_eq!(store.get("tokenName").unwrap().as_deref(), Some("token"));
        assert_eq!(store.len(), 2);

        // Overwrite
        store.set("tokenValue", "def").unwrap();
        assert_eq!(store.get("tokenValue").unwrap().as_deref(), Some("def"));

        // Remove
        assert!(store.remove("tokenName").unwrap());
        assert!(!store.remove("tokenName").unwrap());

        // Clear
        assert_eq!(store.clear(&["tokenName", "tokenValue", "userInfo"]).unwrap(), 1);
        assert_eq!(store.clear(&["tokenName", "tokenValue", "userInfo"]).unwrap(), 0);
        assert!(store.is_empty());
    }
}
