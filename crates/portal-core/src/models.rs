//! 核心数据模型定义
//!
//! 与持久化记录和静态数据集共用 camelCase 的 JSON 形式。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 门户用户
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String, // 注册时生成毫秒时间戳字符串，不保证唯一
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 用户角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 管理员
    Admin,
    /// 医生
    Doctor,
    /// 技师
    Technician,
}

/// 患者基本信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    // 数据集中 P005 记录使用 "patientID" 拼写，读取时兼容，不改写原始数据
    #[serde(alias = "patientID")]
    pub patient_id: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub last_visit: NaiveDate,
    pub status: PatientStatus,
}

impl Patient {
    /// 姓名的显示形式 ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 性别枚举
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// 患者状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Inactive,
}

/// 检查信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String, // 与 patient_id 冗余保存
    pub study_date: NaiveDate,
    pub modality: String, // 检查设备类型 (CT, MRI, X-Ray, US)
    pub description: String,
    pub series_count: u32,
    pub images_count: u32,
    pub status: StudyStatus,
}

/// 检查生命周期状态
///
/// pending → completed → reported 仅作记录，不做转换校验。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StudyStatus {
    Pending,
    Completed,
    Reported,
}

/// 影像实例信息
///
/// 影像是静态占位图 URL，不是解码后的像素数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicomImage {
    pub id: String,
    pub study_id: String,
    pub series_number: i32,
    pub instance_number: i32,
    pub image_url: String,
    pub window_center: i32, // 窗位默认值
    pub window_width: i32,  // 窗宽默认值
    pub pixel_spacing: [f64; 2], // mm
    pub slice_thickness: f64,    // mm
}

/// 诊断报告摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub patient: String,
    pub study: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
    pub radiologist: String,
}

/// 报告状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Pending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_alias() {
        // P005 记录的标识字段拼写为 patientID
        let json = r#"{
            "id": "5",
            "firstName": "Robert",
            "lastName": "Wilson",
            "dateOfBirth": "1970-12-03",
            "patientID": "P005",
            "gender": "male",
            "phone": "+1 (555) 567-8901",
            "email": "robert.wilson@email.com",
            "lastVisit": "2024-01-12",
            "status": "active"
        }"#;

        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.patient_id, "P005");
        assert_eq!(patient.full_name(), "Robert Wilson");

        // 序列化后统一为 patientId
        let out = serde_json::to_value(&patient).unwrap();
        assert_eq!(out["patientId"], "P005");
        assert!(out.get("patientID").is_none());
    }

    #[test]
    fn test_study_status_roundtrip() {
        let study = Study {
            id: "S001".to_string(),
            patient_id: "1".to_string(),
            patient_name: "John Smith".to_string(),
            study_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            modality: "CT".to_string(),
            description: "Chest CT with contrast".to_string(),
            series_count: 3,
            images_count: 120,
            status: StudyStatus::Completed,
        };

        let value = serde_json::to_value(&study).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["studyDate"], "2024-01-15");
    }
}
