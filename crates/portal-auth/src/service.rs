//! 认证服务
//!
//! 内存用户目录，登录只匹配邮箱，密码不做任何校验。

use crate::store::SessionStore;
use portal_core::{PortalError, Result, User, UserRole};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    /// 从不校验，仅为保持请求形状
    pub password: String,
}

/// 注册请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    /// 从不保存
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// 认证服务
#[derive(Clone)]
pub struct AuthService {
    users: Arc<RwLock<Vec<User>>>,
    store: Arc<dyn SessionStore>,
    current: Arc<RwLock<Option<User>>>,
}

impl AuthService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            users: Arc::new(RwLock::new(default_users())),
            store,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// 启动时恢复持久化会话
    ///
    /// 损坏的记录直接丢弃并清除，进程以未登录状态启动。
    pub async fn restore(&self) -> Result<()> {
        let payload = match self.store.load()? {
            Some(payload) => payload,
            None => return Ok(()),
        };

        match serde_json::from_str::<User>(&payload) {
            Ok(user) => {
                info!("Restored session for user: {}", user.email);
                *self.current.write().await = Some(user);
            }
            Err(e) => {
                warn!("Discarding malformed persisted session: {}", e);
                self.store.clear()?;
            }
        }

        Ok(())
    }

    /// 用户登录
    ///
    /// 只要邮箱存在于目录中即成功，密码值被忽略。
    pub async fn login(&self, request: LoginRequest) -> Result<User> {
        let users = self.users.read().await;

        let user = users
            .iter()
            .find(|u| u.email == request.email)
            .cloned()
            .ok_or(PortalError::InvalidCredentials)?;
        drop(users);

        self.persist(&user)?;
        *self.current.write().await = Some(user.clone());
        info!("User logged in: {}", user.email);

        Ok(user)
    }

    /// 用户注册，总是成功
    ///
    /// 生成毫秒时间戳作为 id（不保证唯一），追加到目录并立即登录。
    pub async fn signup(&self, request: SignupRequest) -> Result<User> {
        let user = User {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            avatar: None,
            created_at: chrono::Utc::now(),
        };

        self.users.write().await.push(user.clone());
        self.persist(&user)?;
        *self.current.write().await = Some(user.clone());
        info!("User signed up: {}", user.email);

        Ok(user)
    }

    /// 退出登录，清除持久化记录和当前会话
    pub async fn logout(&self) -> Result<()> {
        self.store.clear()?;
        *self.current.write().await = None;
        info!("User logged out");
        Ok(())
    }

    /// 密码重置
    ///
    /// 邮箱存在即成功，不发送任何邮件也不改变任何状态。
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        let users = self.users.read().await;
        if users.iter().any(|u| u.email == email) {
            info!("Password reset requested for: {}", email);
            Ok(())
        } else {
            Err(PortalError::EmailNotFound)
        }
    }

    /// 当前登录用户
    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// 是否存在会话
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    fn persist(&self, user: &User) -> Result<()> {
        let payload = serde_json::to_string(user)?;
        self.store.save(&payload)
    }
}

/// 预置的模拟用户目录
fn default_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "admin@hospital.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: UserRole::Admin,
            avatar: None,
            created_at: chrono::Utc::now(),
        },
        User {
            id: "2".to_string(),
            email: "doctor@hospital.com".to_string(),
            first_name: "Dr. Sarah".to_string(),
            last_name: "Johnson".to_string(),
            role: UserRole::Doctor,
            avatar: None,
            created_at: chrono::Utc::now(),
        },
    ]
}
