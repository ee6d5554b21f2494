//! 路径解析与 open 操作的 Mock 实现
//!
//! 解析器维护"路径 → inode 号"表；open 在父目录的目录项里查找
//! 末级名字，因此创建操作链接成功后文件立即可打开，幂等快速
//! 路径也能自然生效。

use std::collections::BTreeMap;
use std::string::String;
use std::sync::{Arc, Mutex};

use ext2::{Ext2Volume, PathResolver, RawInode};
use vfs::{FileHandle, FileOpener, FsError, split_path};

use crate::mock::MockVolume;

/// 基于查找表的路径解析器
pub struct MockResolver {
    volume: Arc<MockVolume>,
    paths: Mutex<BTreeMap<String, u32>>,
}

impl MockResolver {
    /// 创建空解析器
    pub fn new(volume: Arc<MockVolume>) -> Self {
        Self {
            volume,
            paths: Mutex::new(BTreeMap::new()),
        }
    }

    /// 登记一条可解析的路径
    pub fn insert(&self, path: &str, ino: u32) {
        self.paths.lock().unwrap().insert(String::from(path), ino);
    }

    fn lookup(&self, path: &str) -> Option<u32> {
        self.paths.lock().unwrap().get(path).copied()
    }
}

impl PathResolver for MockResolver {
    fn resolve(&self, path: &str) -> Result<(u32, RawInode), FsError> {
        let ino = self.lookup(path).ok_or(FsError::NotFound)?;
        let record = self
            .volume
            .read_inode(ino)
            .map_err(|_| FsError::IoError)?;
        Ok((ino, record))
    }
}

/// 在父目录的目录项中查找文件的 open 实现
pub struct MockOpener {
    volume: Arc<MockVolume>,
    resolver: Arc<MockResolver>,
    forced_error: Mutex<Option<FsError>>,
}

impl MockOpener {
    /// 创建 open 实现，复用解析器的路径表
    pub fn new(volume: Arc<MockVolume>, resolver: Arc<MockResolver>) -> Self {
        Self {
            volume,
            resolver,
            forced_error: Mutex::new(None),
        }
    }

    /// 之后的所有 open 调用都返回指定错误
    pub fn force_error(&self, err: FsError) {
        *self.forced_error.lock().unwrap() = Some(err);
    }
}

impl FileOpener for MockOpener {
    fn open(&self, path: &str, handle: &mut FileHandle) -> Result<(), FsError> {
        if let Some(err) = *self.forced_error.lock().unwrap() {
            return Err(err);
        }

        let (parent, name) = split_path(path).map_err(|_| FsError::NotFound)?;
        let (parent_ino, _) = self.resolver.resolve(&parent)?;

        let child = self
            .volume
            .entries(parent_ino)
            .into_iter()
            .find(|(entry_name, _, _)| entry_name == &name)
            .ok_or(FsError::NotFound)?;

        handle.fh = child.1 as u64;
        Ok(())
    }
}
