//! HTTP处理器

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use portal_auth::{LoginRequest, SignupRequest};
use portal_core::PortalError;
use portal_data::{filter_items, paginate, recent_studies, DashboardStats, Page, Searchable};
use portal_viewer::{filter_css, transform_css, ViewerSession};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

/// 处理器错误包装，负责 HTTP 状态码映射
#[derive(Debug)]
pub struct ApiError(pub PortalError);

impl From<PortalError> for ApiError {
    fn from(e: PortalError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PortalError::InvalidCredentials | PortalError::Session(_) => StatusCode::UNAUTHORIZED,
            PortalError::EmailNotFound | PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": true,
            "message": self.0.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// 查看器查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ViewerQuery {
    pub study_id: Option<String>,
}

/// 根路径跳转到仪表盘
pub async fn root_redirect() -> Redirect {
    Redirect::to("/dashboard")
}

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 用户登录
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for: {}", request.email);

    match state.auth.login(request).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => {
            warn!("Login failed: {}", e);
            Err(e.into())
        }
    }
}

/// 用户注册
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.auth.signup(request).await?;
    Ok(Json(user))
}

/// 忘记密码
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    state.auth.reset_password(&request.email).await?;
    Ok(Json(json!({
        "message": "Password reset instructions sent"
    })))
}

/// 退出登录
pub async fn logout(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    state.auth.logout().await?;
    Ok(Json(json!({ "message": "Logged out" })))
}

/// 当前用户信息
pub async fn me(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let user = state
        .auth
        .current_user()
        .await
        .ok_or_else(|| PortalError::Session("User not authenticated".to_string()))?;
    Ok(Json(user))
}

/// 仪表盘
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "stats": DashboardStats::from_dataset(&state.data),
        "recentStudies": recent_studies(&state.data)
    }))
}

/// 患者列表
pub async fn get_patients(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    Json(list_page(&state.data.patients, &query))
}

/// 检查列表
pub async fn get_studies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    Json(list_page(&state.data.studies, &query))
}

/// 报告列表
pub async fn get_reports(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    Json(list_page(&state.data.reports, &query))
}

/// 查看器视图
///
/// 返回选中检查、过滤出的影像列表和初始查看器状态；
/// 无可用影像时带上空状态提示。
pub async fn dicom_viewer(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> impl IntoResponse {
    let study_id = query.study_id.unwrap_or_else(|| "S001".to_string());
    let session = ViewerSession::new(&study_id, &state.data.images);

    let message = session
        .current_image()
        .is_none()
        .then_some("No DICOM images available for this study");
    let transform = transform_css(&session.state);
    let filter = filter_css(&session.state);

    Json(json!({
        "study": state.data.study(&study_id),
        "availableStudies": &state.data.studies,
        "session": session,
        "transform": transform,
        "filter": filter,
        "message": message
    }))
}

/// 过滤 + 分页的通用列表流程
fn list_page<T: Searchable + Clone>(items: &[T], query: &ListQuery) -> Page<T> {
    let term = query.search.as_deref().unwrap_or("");
    let hits: Vec<T> = filter_items(items, term).into_iter().cloned().collect();
    paginate(
        &hits,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(portal_data::pagination::DEFAULT_PAGE_SIZE),
    )
}
