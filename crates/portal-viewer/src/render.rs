//! CSS 渲染输出
//!
//! 变换组合固定为 translate → scale → rotate；
//! 窗宽窗位近似映射到 contrast/brightness 滤镜。

use crate::state::ViewerState;

/// 组合 CSS transform 字符串
pub fn transform_css(state: &ViewerState) -> String {
    format!(
        "translate({}px, {}px) scale({}) rotate({}deg)",
        state.pan.x,
        state.pan.y,
        f64::from(state.zoom) / 100.0,
        state.rotation
    )
}

/// 组合 CSS filter 字符串
///
/// contrast = 窗宽/400，brightness = (窗位+1000)/2000。
/// 这是对窗宽窗位的显示近似，不是像素级窗技术。
pub fn filter_css(state: &ViewerState) -> String {
    format!(
        "contrast({}) brightness({})",
        f64::from(state.window_width) / 400.0,
        f64::from(state.window_center + 1000) / 2000.0
    )
}
