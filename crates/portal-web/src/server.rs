//! Web服务器

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use portal_core::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::guard::session_guard;
use crate::handlers::{
    dashboard, dicom_viewer, forgot_password, get_patients, get_reports, get_studies, health,
    login, logout, me, root_redirect, signup,
};
use crate::AppState;

pub struct WebServer {
    addr: SocketAddr,
    app: Router,
}

impl WebServer {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        let app = Self::create_app(state);
        Self { addr, app }
    }

    fn create_app(state: AppState) -> Router {
        // 受保护视图：无会话时由守卫跳转到 /login
        let protected = Router::new()
            .route("/dashboard", get(dashboard))
            .route("/patients", get(get_patients))
            .route("/studies", get(get_studies))
            .route("/dicom-viewer", get(dicom_viewer))
            .route("/reports", get(get_reports))
            .route("/me", get(me))
            .route("/logout", post(logout))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                session_guard,
            ));

        // 公开路由（登录流程 + 健康检查）
        Router::new()
            .route("/", get(root_redirect))
            .route("/health", get(health))
            .route("/login", post(login))
            .route("/signup", post(signup))
            .route("/forgot-password", post(forgot_password))
            .merge(protected)
            // 全局中间件
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(
                        CorsLayer::new()
                            .allow_origin(Any)
                            .allow_methods(Any)
                            .allow_headers(Any),
                    ),
            )
            .with_state(state)
    }

    pub async fn run(self) -> Result<()> {
        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app).await?;

        Ok(())
    }
}
