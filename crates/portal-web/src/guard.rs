//! 路由守卫
//!
//! 受保护路由在无会话时跳转到登录页。

use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// 会话守卫中间件
pub async fn session_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match guard_redirect(&state).await {
        Some(redirect) => {
            debug!("No session, redirecting {} to /login", request.uri().path());
            redirect.into_response()
        }
        None => next.run(request).await,
    }
}

/// 无会话时的跳转；有会话时放行
pub async fn guard_redirect(state: &AppState) -> Option<Redirect> {
    if state.auth.is_authenticated().await {
        None
    } else {
        Some(Redirect::to("/login"))
    }
}
