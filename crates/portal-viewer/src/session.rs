//! 查看器会话
//!
//! 持有按检查过滤出的影像列表和当前索引。
//! 切换影像不复位任何变换状态。

use crate::state::{ViewerState, DEFAULT_WINDOW_CENTER, DEFAULT_WINDOW_WIDTH};
use portal_core::DicomImage;
use serde::Serialize;
use tracing::debug;

/// 单个检查的查看会话
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSession {
    study_id: String,
    images: Vec<DicomImage>,
    current_index: usize,
    pub state: ViewerState,
}

impl ViewerSession {
    /// 按检查 ID 从全量影像集合中过滤出本会话的影像
    pub fn new(study_id: &str, all_images: &[DicomImage]) -> Self {
        let images: Vec<DicomImage> = all_images
            .iter()
            .filter(|img| img.study_id == study_id)
            .cloned()
            .collect();
        debug!("Viewer session for {}: {} images", study_id, images.len());

        Self {
            study_id: study_id.to_string(),
            images,
            current_index: 0,
            state: ViewerState::new(),
        }
    }

    pub fn study_id(&self) -> &str {
        &self.study_id
    }

    pub fn images(&self) -> &[DicomImage] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 当前影像；索引越界或列表为空时返回 None，
    /// 调用方渲染空状态提示
    pub fn current_image(&self) -> Option<&DicomImage> {
        self.images.get(self.current_index)
    }

    /// 切换当前影像，除索引外不改变任何状态
    pub fn select_image(&mut self, index: usize) {
        self.current_index = index;
    }

    /// 复位变换状态，窗位/窗宽取当前影像的默认值
    pub fn reset(&mut self) {
        let (center, width) = self
            .current_image()
            .map(|img| (img.window_center, img.window_width))
            .unwrap_or((DEFAULT_WINDOW_CENTER, DEFAULT_WINDOW_WIDTH));
        self.state.reset(center, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Point;

    fn image(id: &str, study_id: &str, center: i32, width: i32) -> DicomImage {
        DicomImage {
            id: id.to_string(),
            study_id: study_id.to_string(),
            series_number: 1,
            instance_number: 1,
            image_url: format!("https://example.com/{id}.jpg"),
            window_center: center,
            window_width: width,
            pixel_spacing: [0.5, 0.5],
            slice_thickness: 5.0,
        }
    }

    fn fixture() -> Vec<DicomImage> {
        vec![
            image("IMG001", "S001", 40, 400),
            image("IMG002", "S001", -100, 1500),
            image("IMG003", "S002", 300, 600),
        ]
    }

    #[test]
    fn test_filters_by_study() {
        let session = ViewerSession::new("S001", &fixture());
        assert_eq!(session.image_count(), 2);
        assert_eq!(session.current_image().unwrap().id, "IMG001");
    }

    #[test]
    fn test_empty_study_has_no_current_image() {
        let session = ViewerSession::new("S999", &fixture());
        assert_eq!(session.image_count(), 0);
        assert!(session.current_image().is_none());
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut session = ViewerSession::new("S001", &fixture());
        session.select_image(7);
        assert!(session.current_image().is_none());
    }

    #[test]
    fn test_select_keeps_transform_state() {
        let mut session = ViewerSession::new("S001", &fixture());
        session.state.zoom_in();
        session.state.pointer_down(Point::new(0.0, 0.0));
        session.state.pointer_move(Point::new(9.0, 9.0));
        session.state.pointer_up();

        session.select_image(1);

        // 切换影像不触碰变换状态
        assert_eq!(session.state.zoom, 125);
        assert_eq!(session.state.pan, Point::new(9.0, 9.0));
    }

    #[test]
    fn test_reset_uses_current_image_defaults() {
        let mut session = ViewerSession::new("S002", &fixture());
        session.state.set_window_level(-500, 50);

        session.reset();

        // 取 S002 影像自己的默认值，而不是初始的 40/400
        assert_eq!(session.state.window_center, 300);
        assert_eq!(session.state.window_width, 600);
    }

    #[test]
    fn test_reset_follows_selected_image() {
        let mut session = ViewerSession::new("S001", &fixture());

        session.reset();
        assert_eq!(session.state.window_center, 40);
        assert_eq!(session.state.window_width, 400);

        // 切换影像后复位取新影像的默认值，而不是上一张的
        session.select_image(1);
        session.reset();
        assert_eq!(session.state.window_center, -100);
        assert_eq!(session.state.window_width, 1500);
    }

    #[test]
    fn test_reset_without_image_falls_back() {
        let mut session = ViewerSession::new("S999", &fixture());
        session.state.set_window_level(-500, 50);

        session.reset();

        assert_eq!(session.state.window_center, 40);
        assert_eq!(session.state.window_width, 400);
    }
}
