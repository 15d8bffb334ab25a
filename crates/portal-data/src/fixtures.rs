//! 静态数据集
//!
//! 嵌入 JSON 固定数据，启动时一次性解析。
//! patients.json 中 P005 记录保留原始的 "patientID" 拼写，
//! 由模型侧的 serde alias 兼容读取。

use portal_core::{DicomImage, Patient, Report, Result, Study};
use tracing::info;

const PATIENTS_JSON: &str = include_str!("../fixtures/patients.json");
const STUDIES_JSON: &str = include_str!("../fixtures/studies.json");
const IMAGES_JSON: &str = include_str!("../fixtures/images.json");
const REPORTS_JSON: &str = include_str!("../fixtures/reports.json");

/// 进程内只读数据集
#[derive(Debug, Clone)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub studies: Vec<Study>,
    pub images: Vec<DicomImage>,
    pub reports: Vec<Report>,
}

impl Dataset {
    /// 解析全部嵌入数据
    pub fn load() -> Result<Self> {
        let dataset = Self {
            patients: serde_json::from_str(PATIENTS_JSON)?,
            studies: serde_json::from_str(STUDIES_JSON)?,
            images: serde_json::from_str(IMAGES_JSON)?,
            reports: serde_json::from_str(REPORTS_JSON)?,
        };

        info!(
            "Loaded fixture dataset: {} patients, {} studies, {} images, {} reports",
            dataset.patients.len(),
            dataset.studies.len(),
            dataset.images.len(),
            dataset.reports.len()
        );

        Ok(dataset)
    }

    /// 按检查 ID 查找检查
    pub fn study(&self, study_id: &str) -> Option<&Study> {
        self.studies.iter().find(|s| s.id == study_id)
    }

    /// 某个检查的全部影像
    pub fn images_for_study(&self, study_id: &str) -> Vec<&DicomImage> {
        self.images
            .iter()
            .filter(|img| img.study_id == study_id)
            .collect()
    }
}
