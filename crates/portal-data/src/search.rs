//! 列表搜索过滤
//!
//! 大小写不敏感的子串匹配，每次输入对全量集合即时重算，
//! 不去抖也不建索引。每种实体的匹配字段固定。

use portal_core::{Patient, Report, Study};

/// 可被列表搜索的实体
pub trait Searchable {
    /// needle 已转为小写
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for Patient {
    // 匹配姓名全称、院内患者 ID、邮箱
    fn matches(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
            || self.patient_id.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

impl Searchable for Study {
    // 匹配患者姓名、设备类型、检查描述
    fn matches(&self, needle: &str) -> bool {
        self.patient_name.to_lowercase().contains(needle)
            || self.modality.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Searchable for Report {
    // 匹配患者姓名、检查描述、报告医生
    fn matches(&self, needle: &str) -> bool {
        self.patient.to_lowercase().contains(needle)
            || self.study.to_lowercase().contains(needle)
            || self.radiologist.to_lowercase().contains(needle)
    }
}

/// 过滤集合，空搜索词匹配所有记录
pub fn filter_items<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}
