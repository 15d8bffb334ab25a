//! # Portal Viewer
//!
//! 影像查看器的交互状态机：工具模式、缩放/旋转/平移、窗宽窗位，
//! 以及拖拽手势的完整生命周期。渲染输出是 CSS transform/filter
//! 字符串，窗宽窗位映射只是显示近似，不是辐射度计算。

pub mod render;
pub mod session;
pub mod state;

pub use render::{filter_css, transform_css};
pub use session::ViewerSession;
pub use state::{Point, Tool, ViewerState};
