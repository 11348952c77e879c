//! Auth Service - 登录、注册、登出
//!
//! 负责 `Unauthenticated ⇄ Authenticated` 的主动切换；
//! 服务端判定会话失效 (401) 的被动切换由 ApiClient 处理

use serde::Deserialize;

use crate::application::api::UserApi;
use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::ports::Notification;
use crate::domain::{Credential, Envelope, SessionState, UserProfile, LOGIN_PATH};

/// 登录接口 data 的结构
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginToken {
    token_name: String,
    token_value: String,
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    users: UserApi,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        let users = UserApi::new(client.clone());
        Self { client, users }
    }

    /// 登录并保存凭证与用户资料
    ///
    /// 凭证保存后即视为已登录；随后的资料加载失败不会回滚凭证
    pub async fn login(&self, account: &str, password: &str) -> Result<UserProfile, ApiClientError> {
        let envelope = self.users.login(account, password).await?;

        let token: LoginToken = envelope
            .data_as()
            .map_err(|e| self.client.reject_data("login token", e))?;
        let credential = Credential::new(token.token_name, token.token_value);
        if !credential.is_usable() {
            return Err(self
                .client
                .reject_data("login token", "empty name or value"));
        }

        self.client
            .session()
            .save_credential(&credential)
            .map_err(|e| self.client.reject_store(e))?;
        tracing::info!(account = %account, "Logged in");

        self.refresh_profile().await
    }

    pub async fn register(&self, account: &str, password: &str) -> Result<Envelope, ApiClientError> {
        let envelope = self.users.register(account, password).await?;
        tracing::info!(account = %account, "Registered");
        Ok(envelope)
    }

    /// 重新拉取 `/user/me` 并保存
    pub async fn refresh_profile(&self) -> Result<UserProfile, ApiClientError> {
        let envelope = self.users.me().await?;
        let profile: UserProfile = envelope
            .data_as()
            .map_err(|e| self.client.reject_data("user profile", e))?;
        self.client
            .session()
            .save_profile(&profile)
            .map_err(|e| self.client.reject_store(e))?;
        Ok(profile)
    }

    /// 清除本地会话并回到登录页
    pub fn logout(&self) -> Result<(), ApiClientError> {
        let cleared = self
            .client
            .session()
            .clear()
            .map_err(|e| self.client.reject_store(e))?;
        if cleared {
            tracing::info!("Logged out");
            self.client
                .notifier()
                .notify(Notification::success("logged out"));
        }
        self.client.navigator().go_to(LOGIN_PATH);
        Ok(())
    }

    pub fn state(&self) -> Result<SessionState, ApiClientError> {
        Ok(self.client.session().state()?)
    }
}
