//! 查看器变换状态机

use serde::{Deserialize, Serialize};

/// 缩放范围与步长（百分比）
pub const ZOOM_MIN: i32 = 25;
pub const ZOOM_MAX: i32 = 500;
pub const ZOOM_STEP: i32 = 25;

/// 窗位范围
pub const WINDOW_CENTER_MIN: i32 = -1000;
pub const WINDOW_CENTER_MAX: i32 = 1000;

/// 窗宽范围
pub const WINDOW_WIDTH_MIN: i32 = 1;
pub const WINDOW_WIDTH_MAX: i32 = 2000;

/// 未选中影像时的窗位/窗宽默认值
pub const DEFAULT_WINDOW_CENTER: i32 = 40;
pub const DEFAULT_WINDOW_WIDTH: i32 = 400;

/// 工具模式
///
/// 只有 pan 真正驱动行为，measure/annotate 是可选中的占位工具。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Pan,
    Zoom,
    Measure,
    Annotate,
}

/// 二维坐标/偏移
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 查看器变换状态
///
/// 拖拽中间量不随状态对外序列化。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub tool: Tool,
    pub zoom: i32,
    pub rotation: i32,
    pub pan: Point,
    pub window_center: i32,
    pub window_width: i32,
    #[serde(skip)]
    dragging: bool,
    #[serde(skip)]
    drag_start: Point,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            tool: Tool::Pan,
            zoom: 100,
            rotation: 0,
            pan: Point::default(),
            window_center: DEFAULT_WINDOW_CENTER,
            window_width: DEFAULT_WINDOW_WIDTH,
            dragging: false,
            drag_start: Point::default(),
        }
    }

    /// 切换工具，不影响任何变换状态
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// 放大一档，上限 500%
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// 缩小一档，下限 25%
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// 顺时针旋转 90°，270° 后回到 0°
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    /// 直接设置窗位/窗宽，越界值收敛到控件范围内
    pub fn set_window_level(&mut self, center: i32, width: i32) {
        self.window_center = center.clamp(WINDOW_CENTER_MIN, WINDOW_CENTER_MAX);
        self.window_width = width.clamp(WINDOW_WIDTH_MIN, WINDOW_WIDTH_MAX);
    }

    /// 指针按下：仅在 pan 模式下开始拖拽，
    /// 记录光标与当前平移量的差值
    pub fn pointer_down(&mut self, cursor: Point) {
        if self.tool == Tool::Pan {
            self.dragging = true;
            self.drag_start = Point::new(cursor.x - self.pan.x, cursor.y - self.pan.y);
        }
    }

    /// 指针移动：拖拽中按差值重算平移量，无边界限制
    pub fn pointer_move(&mut self, cursor: Point) {
        if self.dragging && self.tool == Tool::Pan {
            self.pan = Point::new(cursor.x - self.drag_start.x, cursor.y - self.drag_start.y);
        }
    }

    /// 指针抬起：无条件结束拖拽
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// 指针离开区域，与抬起等价
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// 复位：缩放 100%、旋转 0°、平移归零，
    /// 窗位/窗宽恢复到给定影像默认值
    pub fn reset(&mut self, window_center: i32, window_width: i32) {
        self.zoom = 100;
        self.rotation = 0;
        self.pan = Point::default();
        self.set_window_level(window_center, window_width);
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_bounds() {
        let mut state = ViewerState::new();

        // 逐档放大直到上限
        for _ in 0..30 {
            state.zoom_in();
            assert!(state.zoom <= ZOOM_MAX);
            assert_eq!(state.zoom % ZOOM_STEP, 0);
        }
        assert_eq!(state.zoom, ZOOM_MAX);

        for _ in 0..30 {
            state.zoom_out();
            assert!(state.zoom >= ZOOM_MIN);
        }
        assert_eq!(state.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_rotation_cycles() {
        let mut state = ViewerState::new();
        let expected = [90, 180, 270, 0, 90];

        for want in expected {
            state.rotate();
            assert_eq!(state.rotation, want);
            assert!([0, 90, 180, 270].contains(&state.rotation));
        }
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut state = ViewerState::new();

        state.pointer_down(Point::new(10.0, 10.0));
        assert!(state.is_dragging());

        state.pointer_move(Point::new(15.0, 22.0));
        assert_eq!(state.pan, Point::new(5.0, 12.0));

        // 继续拖拽在同一差值上累计
        state.pointer_move(Point::new(-3.0, 4.0));
        assert_eq!(state.pan, Point::new(-13.0, -6.0));

        state.pointer_up();
        assert!(!state.is_dragging());

        // 抬起后移动不再改变平移量
        state.pointer_move(Point::new(100.0, 100.0));
        assert_eq!(state.pan, Point::new(-13.0, -6.0));
    }

    #[test]
    fn test_drag_resumes_from_current_pan() {
        let mut state = ViewerState::new();

        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(30.0, 40.0));
        state.pointer_up();

        // 第二次拖拽以当前平移量为基准
        state.pointer_down(Point::new(5.0, 5.0));
        state.pointer_move(Point::new(6.0, 7.0));
        assert_eq!(state.pan, Point::new(31.0, 42.0));
    }

    #[test]
    fn test_no_drag_outside_pan_tool() {
        let mut state = ViewerState::new();
        state.set_tool(Tool::Measure);

        state.pointer_down(Point::new(10.0, 10.0));
        assert!(!state.is_dragging());
        state.pointer_move(Point::new(50.0, 50.0));
        assert_eq!(state.pan, Point::default());
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut state = ViewerState::new();
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_leave();
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_window_level_clamped() {
        let mut state = ViewerState::new();

        state.set_window_level(5000, -10);
        assert_eq!(state.window_center, WINDOW_CENTER_MAX);
        assert_eq!(state.window_width, WINDOW_WIDTH_MIN);

        state.set_window_level(-9999, 99999);
        assert_eq!(state.window_center, WINDOW_CENTER_MIN);
        assert_eq!(state.window_width, WINDOW_WIDTH_MAX);

        state.set_window_level(300, 600);
        assert_eq!((state.window_center, state.window_width), (300, 600));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = ViewerState::new();
        state.zoom_in();
        state.rotate();
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(42.0, -17.0));
        state.pointer_up();
        state.set_window_level(700, 80);

        state.reset(300, 600);

        assert_eq!(state.zoom, 100);
        assert_eq!(state.rotation, 0);
        assert_eq!(state.pan, Point::default());
        assert_eq!(state.window_center, 300);
        assert_eq!(state.window_width, 600);
    }
}
