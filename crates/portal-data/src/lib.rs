//! # Portal Data
//!
//! 静态模拟数据集及其上的列表操作：
//! 大小写不敏感的子串过滤、定长分页、仪表盘统计。
//! 数据一次性加载，进程生命周期内只读。

pub mod fixtures;
pub mod pagination;
pub mod search;
pub mod stats;

pub use fixtures::Dataset;
pub use pagination::{paginate, Page, Paginator};
pub use search::{filter_items, Searchable};
pub use stats::{recent_studies, DashboardStats};
