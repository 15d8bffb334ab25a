//! # Portal Core
//!
//! 影像管理门户的核心模块，提供基础数据结构和错误定义。

pub mod error;
pub mod models;

pub use error::{PortalError, Result};
pub use models::*;
