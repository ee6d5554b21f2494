//! 内存中的 Mock 卷
//!
//! 用 BTreeMap/BTreeSet 模拟 inode 位图、目录块与 inode 表，
//! 并提供故障注入开关（扩容配额、链接/写入错误、分配器异常）。

use std::collections::{BTreeMap, BTreeSet};
use std::string::String;
use std::sync::Mutex;
use std::vec::Vec;

use ext2::{DirentKind, Ext2Volume, RawInode, VolumeError, VolumeStats};
use vfs::FileMode;

/// 模拟的目录块大小
const BLOCK_SIZE: u32 = 1024;
/// 每次扩容增加的目录项容量
const ENTRIES_PER_BLOCK: usize = 4;

struct MockDir {
    entries: Vec<(String, u32, DirentKind)>,
    capacity: usize,
}

struct VolumeState {
    total_inodes: u32,
    in_use: BTreeSet<u32>,
    records: BTreeMap<u32, RawInode>,
    dirs: BTreeMap<u32, MockDir>,
    expansions_left: Option<u32>,
    expand_grows_size: bool,
    forced_next_ino: Option<u32>,
    new_inode_error: Option<VolumeError>,
    link_error: Option<VolumeError>,
    write_error: bool,
    total_blocks: u64,
    used_blocks: u64,
    new_inode_calls: u32,
    link_calls: u32,
    expand_calls: u32,
}

/// 内存 Mock 卷
pub struct MockVolume {
    state: Mutex<VolumeState>,
}

impl MockVolume {
    /// 创建一个有 `total_inodes` 个 inode 的空卷
    pub fn new(total_inodes: u32) -> Self {
        Self {
            state: Mutex::new(VolumeState {
                total_inodes,
                in_use: BTreeSet::new(),
                records: BTreeMap::new(),
                dirs: BTreeMap::new(),
                expansions_left: None,
                expand_grows_size: true,
                forced_next_ino: None,
                new_inode_error: None,
                link_error: None,
                write_error: false,
                total_blocks: 4096,
                used_blocks: 0,
                new_inode_calls: 0,
                link_calls: 0,
                expand_calls: 0,
            }),
        }
    }

    /// 添加一个可容纳 `capacity` 个目录项的目录
    pub fn add_dir(&self, ino: u32, capacity: usize) {
        let mut st = self.state.lock().unwrap();
        st.in_use.insert(ino);
        let record = RawInode {
            mode: FileMode::S_IFDIR.bits() as u16 | 0o755,
            size: BLOCK_SIZE,
            links_count: 2,
            ..RawInode::default()
        };
        st.records.insert(ino, record);
        st.dirs.insert(
            ino,
            MockDir {
                entries: Vec::new(),
                capacity,
            },
        );
    }

    /// 在位图中预先标记一个 inode（模拟位图与分配器不一致）
    pub fn mark_in_use(&self, ino: u32) {
        self.state.lock().unwrap().in_use.insert(ino);
    }

    /// 强制分配器下次交出指定的 inode 号
    pub fn force_next_ino(&self, ino: u32) {
        self.state.lock().unwrap().forced_next_ino = Some(ino);
    }

    /// 限制剩余可扩容次数（0 表示扩容立即失败）
    pub fn set_expansions_left(&self, n: u32) {
        self.state.lock().unwrap().expansions_left = Some(n);
    }

    /// 扩容时不增长目录大小（用于触发进度检查）
    pub fn freeze_size_on_expand(&self) {
        self.state.lock().unwrap().expand_grows_size = false;
    }

    /// 注入固定的分配器错误
    pub fn inject_new_inode_error(&self, err: VolumeError) {
        self.state.lock().unwrap().new_inode_error = Some(err);
    }

    /// 注入固定的链接错误
    pub fn inject_link_error(&self, err: VolumeError) {
        self.state.lock().unwrap().link_error = Some(err);
    }

    /// 注入 inode 记录写入错误
    pub fn inject_write_error(&self) {
        self.state.lock().unwrap().write_error = true;
    }

    /// 读取目录当前的全部目录项
    pub fn entries(&self, dir: u32) -> Vec<(String, u32, DirentKind)> {
        let st = self.state.lock().unwrap();
        st.dirs.get(&dir).map(|d| d.entries.clone()).unwrap_or_default()
    }

    /// 查询 inode 记录（未写入返回 None）
    pub fn record(&self, ino: u32) -> Option<RawInode> {
        self.state.lock().unwrap().records.get(&ino).copied()
    }

    /// 已触发的扩容次数
    pub fn expand_count(&self) -> u32 {
        self.state.lock().unwrap().expand_calls
    }

    /// 已触发的分配次数
    pub fn new_inode_count(&self) -> u32 {
        self.state.lock().unwrap().new_inode_calls
    }
}

impl Ext2Volume for MockVolume {
    fn new_inode(&self, _parent: u32, _mode: FileMode) -> Result<u32, VolumeError> {
        let mut st = self.state.lock().unwrap();
        st.new_inode_calls += 1;

        if let Some(err) = st.new_inode_error {
            return Err(err);
        }

        if let Some(ino) = st.forced_next_ino.take() {
            return Ok(ino);
        }

        // ino 1 在 ext2 中保留给坏块表，从 2 起分配
        let candidate = (2..=st.total_inodes).find(|ino| !st.in_use.contains(ino));
        candidate.ok_or(VolumeError::NoSpace)
    }

    fn link(
        &self,
        parent: u32,
        name: &str,
        child: u32,
        kind: DirentKind,
    ) -> Result<(), VolumeError> {
        let mut st = self.state.lock().unwrap();
        st.link_calls += 1;

        if let Some(err) = st.link_error {
            return Err(err);
        }

        let dir = st.dirs.get_mut(&parent).ok_or(VolumeError::Io)?;
        if dir.entries.len() >= dir.capacity {
            return Err(VolumeError::DirNoSpace);
        }
        dir.entries.push((String::from(name), child, kind));
        Ok(())
    }

    fn expand_dir(&self, parent: u32) -> Result<(), VolumeError> {
        let mut guard = self.state.lock().unwrap();
        let st = &mut *guard;
        st.expand_calls += 1;

        match st.expansions_left {
            Some(0) => return Err(VolumeError::NoSpace),
            Some(n) => st.expansions_left = Some(n - 1),
            None => {}
        }

        let dir = st.dirs.get_mut(&parent).ok_or(VolumeError::Io)?;
        dir.capacity += ENTRIES_PER_BLOCK;
        st.used_blocks += 1;

        if st.expand_grows_size {
            if let Some(record) = st.records.get_mut(&parent) {
                record.size += BLOCK_SIZE;
                record.blocks += BLOCK_SIZE / 512;
            }
        }
        Ok(())
    }

    fn read_inode(&self, ino: u32) -> Result<RawInode, VolumeError> {
        let st = self.state.lock().unwrap();
        st.records.get(&ino).copied().ok_or(VolumeError::Io)
    }

    fn write_new_inode(&self, ino: u32, inode: &RawInode) -> Result<(), VolumeError> {
        let mut st = self.state.lock().unwrap();
        if st.write_error {
            return Err(VolumeError::Io);
        }
        st.records.insert(ino, *inode);
        Ok(())
    }

    fn inode_in_use(&self, ino: u32) -> bool {
        self.state.lock().unwrap().in_use.contains(&ino)
    }

    fn alloc_stats(&self, ino: u32, delta: i32, _is_dir: bool) {
        let mut st = self.state.lock().unwrap();
        if delta > 0 {
            st.in_use.insert(ino);
        } else {
            st.in_use.remove(&ino);
        }
    }

    fn stats(&self) -> VolumeStats {
        let st = self.state.lock().unwrap();
        VolumeStats {
            total_inodes: st.total_inodes,
            free_inodes: st.total_inodes - st.in_use.len() as u32,
            total_blocks: st.total_blocks,
            free_blocks: st.total_blocks - st.used_blocks,
        }
    }
}
