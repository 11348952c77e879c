//! Session Service - 会话存储的类型化视图
//!
//! 唯一的持久化布局：
//! - `tokenName`  凭证请求头名称
//! - `tokenValue` 凭证请求头值
//! - `userInfo`   JSON 序列化的用户资料

use std::sync::Arc;

use crate::application::ports::{SessionStorePort, StoreError};
use crate::domain::{Credential, SessionState, UserProfile};

/// 存储键名
pub mod keys {
    pub const TOKEN_NAME: &str = "tokenName";
    pub const TOKEN_VALUE: &str = "tokenValue";
    pub const USER_INFO: &str = "userInfo";

    pub const ALL: [&str; 3] = [TOKEN_NAME, TOKEN_VALUE, USER_INFO];
}

/// 会话服务
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStorePort>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    /// 读取当前凭证；名称或值缺失/为空时视为未登录
    pub fn credential(&self) -> Result<Option<Credential>, StoreError> {
        let name = self.store.get(keys::TOKEN_NAME)?;
        let value = self.store.get(keys::TOKEN_VALUE)?;

        Ok(match (name, value) {
            (Some(name), Some(value)) => {
                let credential = Credential::new(name, value);
                credential.is_usable().then_some(credential)
            }
            _ => None,
        })
    }

    pub fn save_credential(&self, credential: &Credential) -> Result<(), StoreError> {
        self.store.set(keys::TOKEN_NAME, &credential.header_name)?;
        self.store.set(keys::TOKEN_VALUE, &credential.header_value)?;
        tracing::debug!(header = %credential.header_name, "Credential saved");
        Ok(())
    }

    pub fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        match self.store.get(keys::USER_INFO)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupted {
                    key: keys::USER_INFO.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(profile).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(keys::USER_INFO, &raw)?;
        tracing::debug!(user_id = profile.id, "Profile saved");
        Ok(())
    }

    pub fn current_user_id(&self) -> Result<Option<i64>, StoreError> {
        Ok(self.profile()?.map(|p| p.id))
    }

    /// 删除全部会话键；返回是否真的删除了内容，重复调用返回 false
    pub fn clear(&self) -> Result<bool, StoreError> {
        let removed = self.store.clear(&keys::ALL)?;
        if removed > 0 {
            tracing::info!(removed = removed, "Session cleared");
        }
        Ok(removed > 0)
    }

    pub fn state(&self) -> Result<SessionState, StoreError> {
        match self.credential()? {
            Some(credential) => Ok(SessionState::Authenticated {
                credential,
                profile: self.profile()?,
            }),
            None => Ok(SessionState::Unauthenticated),
        }
    }
}
