//! 配置管理
//!
//! 默认值 ← 可选配置文件 ← PORTAL_* 环境变量，逐层覆盖。

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// 门户完整配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 会话存储配置
    pub session: SessionConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听主机
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 会话存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// 持久化会话文件路径（单键存储）
    pub store_path: String,
}

impl PortalConfig {
    /// 加载配置，config_path 为空时仅用默认值和环境变量
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080i64)?
            .set_default("session.store_path", "./data/session.json")?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("PORTAL").separator("__"));

        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
