//! 会话存储
//!
//! 显式注入的存储抽象，对应浏览器端单键 local storage：
//! 一条序列化的用户记录，无 schema 版本号。

use portal_core::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 会话存储接口
///
/// 读取在应用启动时同步完成，因此接口保持同步。
pub trait SessionStore: Send + Sync {
    /// 读取持久化的原始记录，不存在时返回 None
    fn load(&self) -> Result<Option<String>>;

    /// 写入序列化后的用户记录
    fn save(&self, payload: &str) -> Result<()>;

    /// 清除持久化记录，记录不存在时也视为成功
    fn clear(&self) -> Result<()>;
}

/// 基于文件的会话存储
///
/// 单文件对应单个存储键，每个进程持有自己的一份会话。
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 内存会话存储，用于测试
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入任意内容，便于构造损坏的持久化记录
    pub fn set_raw(&self, payload: impl Into<String>) {
        *self.slot.lock().unwrap() = Some(payload.into());
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        *self.slot.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FileSessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "portal-session-{}-{}.json",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        FileSessionStore::new(path)
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());

        store.save(r#"{"id":"1"}"#).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"id":"1"}"#));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // 重复清除不报错
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store_raw_injection() {
        let store = MemorySessionStore::new();
        store.set_raw("not json at all");
        assert_eq!(store.load().unwrap().as_deref(), Some("not json at all"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
