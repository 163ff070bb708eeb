use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::errors::{LinkRouterError, Result};

pub mod demo;
pub mod file;
pub mod memory;
pub mod models;

pub use file::FileLinkStore;
pub use memory::InMemoryLinkStore;
pub use models::{Destination, Link};

/// 链接存储 trait，供路由层查询与修改链接
///
/// 实现自行处理并发读写，调用方通过 `Arc` 共享，无需额外加锁
pub trait LinkStore: Send + Sync {
    /// 按 id upsert：id 已存在则整体替换，否则追加
    fn save_link(&self, link: Link) -> Result<()>;

    /// 按 id 查询，不区分是否启用
    fn get_link_by_id(&self, id: &str) -> Result<Link>;

    /// 按短码查询，未启用的链接视为不存在
    fn get_link_by_short(&self, short: &str) -> Result<Link>;

    /// 切换启用状态并返回更新后的记录
    ///
    /// 无论当前是否启用都能找到
    fn toggle_link_by_short(&self, short: &str) -> Result<Link>;

    /// 所有记录，按插入顺序
    fn list_links(&self) -> Result<Vec<Link>>;

    fn backend_name(&self) -> &'static str;
}

/// 去掉短码首尾的 `/`
pub fn normalize_short(short: &str) -> &str {
    short.trim_matches('/')
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn LinkStore>> {
        let store: Arc<dyn LinkStore> = match config.backend.to_lowercase().as_str() {
            "memory" => Arc::new(InMemoryLinkStore::new()),
            "file" => Arc::new(FileLinkStore::open(&config.file_path)?),
            other => {
                return Err(LinkRouterError::config(format!(
                    "unknown storage backend '{}', expected 'memory' or 'file'",
                    other
                )));
            }
        };

        if config.seed_demo_links {
            let seeded = demo::seed(store.as_ref())?;
            info!("Seeded {} demo links", seeded);
        }

        info!("Using storage backend: {}", store.backend_name());
        Ok(store)
    }
}
