//! # Portal Web
//!
//! HTTP 表面：路由守卫中间件、处理器和服务器循环。
//! 路由路径与原客户端视图路径一一对应。

pub mod guard;
pub mod handlers;
pub mod server;

use portal_auth::AuthService;
use portal_data::Dataset;
use std::sync::Arc;

/// 共享应用状态
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub data: Arc<Dataset>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, data: Arc<Dataset>) -> Self {
        Self { auth, data }
    }
}

pub use server::WebServer;
