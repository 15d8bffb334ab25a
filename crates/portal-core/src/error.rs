//! 错误定义模块

use thiserror::Error;

/// 门户系统统一错误类型
#[derive(Error, Debug)]
pub enum PortalError {
    /// 登录失败，固定提示语，不泄露具体原因
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 密码重置时邮箱不存在
    #[error("No user found with this email address")]
    EmailNotFound,

    #[error("配置错误: {0}")]
    Config(String),

    #[error("会话错误: {0}")]
    Session(String),

    #[error("验证错误: {0}")]
    Validation(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("系统内部错误: {0}")]
    Internal(String),
}

/// 门户系统统一结果类型
pub type Result<T> = std::result::Result<T, PortalError>;
