//! 门户服务器主程序

mod config;

use clap::Parser;
use config::PortalConfig;
use portal_auth::{AuthService, FileSessionStore};
use portal_core::{PortalError, Result};
use portal_data::Dataset;
use portal_web::{AppState, WebServer};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// 门户服务器命令行参数
#[derive(Parser, Debug)]
#[command(name = "portal-server")]
#[command(about = "医学影像管理门户服务器")]
struct Args {
    /// 监听主机
    #[arg(long)]
    host: Option<String>,

    /// 监听端口
    #[arg(short, long)]
    port: Option<u16>,

    /// 会话文件路径
    #[arg(short, long)]
    session_file: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    info!("启动影像门户服务器...");

    // 加载配置，命令行参数覆盖配置文件
    let mut portal_config = PortalConfig::load(args.config.as_deref())
        .map_err(|e| PortalError::Config(e.to_string()))?;
    if let Some(host) = args.host {
        portal_config.server.host = host;
    }
    if let Some(port) = args.port {
        portal_config.server.port = port;
    }
    if let Some(path) = args.session_file {
        portal_config.session.store_path = path;
    }

    info!("门户服务器配置:");
    info!("  监听地址: {}:{}", portal_config.server.host, portal_config.server.port);
    info!("  会话文件: {}", portal_config.session.store_path);

    // 加载静态数据集
    let dataset = Arc::new(Dataset::load()?);

    // 认证服务：注入文件会话存储，先于监听恢复持久化会话
    let store = Arc::new(FileSessionStore::new(&portal_config.session.store_path));
    let auth = Arc::new(AuthService::new(store));
    auth.restore().await?;

    let addr: SocketAddr = format!(
        "{}:{}",
        portal_config.server.host, portal_config.server.port
    )
    .parse()
    .map_err(|e| PortalError::Config(format!("Invalid listen address: {e}")))?;

    let server = WebServer::new(addr, AppState::new(auth, dataset));
    server.run().await
}
