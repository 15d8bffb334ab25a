//! # Portal Auth
//!
//! 模拟认证服务：内存用户目录 + 可注入的会话存储。
//! 密码从不校验也从不保存，仅用于演示登录流程。

pub mod service;
pub mod store;

pub use service::{AuthService, LoginRequest, SignupRequest};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
