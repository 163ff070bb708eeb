//! 基于 JSON 文件的链接存储
//!
//! 记录保存在内存中（见 [`InMemoryLinkStore`]），每次修改后整体写回磁盘。
//! 修改先作用于临时副本，文件写入成功后才对读者可见。
//! 文件不存在时以空存储启动，并在打开时创建文件。

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{error, info};

use super::{InMemoryLinkStore, Link, LinkStore};
use crate::errors::{LinkRouterError, Result};

pub struct FileLinkStore {
    file_path: PathBuf,
    inner: InMemoryLinkStore,
    /// 串行化「修改 + 写盘」，保证文件与内存一致
    write_lock: Mutex<()>,
}

impl FileLinkStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            file_path: path.as_ref().to_path_buf(),
            inner: InMemoryLinkStore::new(),
            write_lock: Mutex::new(()),
        };
        let links = store.load_from_file()?;
        info!(
            "FileLinkStore loaded {} links from {}",
            links.len(),
            store.file_path.display()
        );
        store.inner.replace_all(links);
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(&self) -> Result<Vec<Link>> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => serde_json::from_str::<Vec<Link>>(&content).map_err(|e| {
                error!("Failed to parse links file: {}", e);
                LinkRouterError::serialization(format!(
                    "failed to parse links file {}: {}",
                    self.file_path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Links file {} does not exist, creating an empty one",
                    self.file_path.display()
                );
                if let Some(parent) = self.file_path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&self.file_path, "[]")?;
                Ok(Vec::new())
            }
            Err(e) => Err(LinkRouterError::file_operation(format!(
                "failed to read {}: {}",
                self.file_path.display(),
                e
            ))),
        }
    }

    fn persist(&self, links: &[Link]) -> Result<()> {
        let json = serde_json::to_string_pretty(links)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }

    /// 在副本上执行 `mutate`，写盘成功后替换内存中的记录
    ///
    /// 调用方需持有 `write_lock`
    fn commit<T>(&self, mutate: impl FnOnce(&InMemoryLinkStore) -> Result<T>) -> Result<T> {
        let scratch = InMemoryLinkStore::with_links(self.inner.list_links()?);
        let result = mutate(&scratch)?;
        let links = scratch.list_links()?;
        self.persist(&links).inspect_err(|e| {
            error!(
                "Failed to write links file {}: {}",
                self.file_path.display(),
                e
            );
        })?;
        self.inner.replace_all(links);
        Ok(result)
    }

    /// 重新读取文件，丢弃内存中的状态
    pub fn reload(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        let links = self.load_from_file()?;
        self.inner.replace_all(links);
        info!("Reloaded links from {}", self.file_path.display());
        Ok(())
    }
}

impl LinkStore for FileLinkStore {
    fn save_link(&self, link: Link) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.commit(|links| links.save_link(link))
    }

    fn get_link_by_id(&self, id: &str) -> Result<Link> {
        self.inner.get_link_by_id(id)
    }

    fn get_link_by_short(&self, short: &str) -> Result<Link> {
        self.inner.get_link_by_short(short)
    }

    fn toggle_link_by_short(&self, short: &str) -> Result<Link> {
        let _guard = self.write_lock.lock();
        self.commit(|links| links.toggle_link_by_short(short))
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        self.inner.list_links()
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
