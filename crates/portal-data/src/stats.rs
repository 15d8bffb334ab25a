//! 仪表盘统计

use crate::fixtures::Dataset;
use portal_core::{PatientStatus, Study, StudyStatus};
use serde::Serialize;

/// 近期检查显示条数
const RECENT_STUDIES_LIMIT: usize = 5;

/// 首页统计卡片数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub active_patients: usize,
    pub total_studies: usize,
    pub pending_studies: usize,
}

impl DashboardStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            total_patients: dataset.patients.len(),
            active_patients: dataset
                .patients
                .iter()
                .filter(|p| p.status == PatientStatus::Active)
                .count(),
            total_studies: dataset.studies.len(),
            pending_studies: dataset
                .studies
                .iter()
                .filter(|s| s.status == StudyStatus::Pending)
                .count(),
        }
    }
}

/// 近期检查列表（集合前若干条）
pub fn recent_studies(dataset: &Dataset) -> &[Study] {
    let end = RECENT_STUDIES_LIMIT.min(dataset.studies.len());
    &dataset.studies[..end]
}
