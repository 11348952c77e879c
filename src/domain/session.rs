//! Session Types - 登录凭证与用户资料

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 管理员角色值
pub const ADMIN_ROLE: i32 = 1;

/// 登录凭证
///
/// 请求头名称由后端在登录时下发，随凭证一起保存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "tokenName")]
    pub header_name: String,
    #[serde(rename = "tokenValue")]
    pub header_value: String,
}

impl Credential {
    pub fn new(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
        }
    }

    /// 名称与值都非空才算有效
    pub fn is_usable(&self) -> bool {
        !self.header_name.is_empty() && !self.header_value.is_empty()
    }
}

/// 当前登录用户资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub user_account: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub user_role: Option<i32>,
    /// 后端返回的其他字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.user_role == Some(ADMIN_ROLE)
    }

    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.user_account.as_deref())
            .unwrap_or("")
    }
}

/// 会话状态
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated {
        credential: Credential,
        profile: Option<UserProfile>,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credential_wire_names() {
        let cred: Credential =
            serde_json::from_value(json!({"tokenName": "satoken", "tokenValue": "abc"})).unwrap();
        assert_eq!(cred, Credential::new("satoken", "abc"));
        assert!(cred.is_usable());
        assert!(!Credential::new("", "abc").is_usable());
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 3,
            "userAccount": "alice",
            "userRole": 1,
            "signDays": 12
        }))
        .unwrap();
        assert!(profile.is_admin());
        assert_eq!(profile.display_name(), "alice");
        assert_eq!(profile.extra.get("signDays"), Some(&json!(12)));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["signDays"], json!(12));
        assert_eq!(back["userAccount"], json!("alice"));
    }

    #[test]
    fn test_regular_user_is_not_admin() {
        let profile: UserProfile =
            serde_json::from_value(json!({"id": 4, "userRole": 0})).unwrap();
        assert!(!profile.is_admin());
    }
}
