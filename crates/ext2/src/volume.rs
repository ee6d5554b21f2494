//! 底层文件系统库接口
//!
//! 将 ext2 库（inode 分配器、目录写入、位图、inode 表）的能力
//! 抽象为 [`Ext2Volume`] trait。崩溃一致性与跨进程锁由库一侧
//! 负责，本核心只通过这些访问器读写磁盘结构。

use crate::dirent::DirentKind;
use crate::inode::RawInode;
use vfs::FileMode;

/// 库层错误
///
/// 在核心边界被翻译为固定的 POSIX 错误集合；只有
/// [`VolumeError::DirNoSpace`] 会触发自动重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeError {
    /// 目录已分配的块写满，无法再插入目录项
    DirNoSpace,
    /// inode 或块耗尽
    NoSpace,
    /// 其他读写失败
    Io,
}

/// 卷统计信息
///
/// 用于分配计数校验与故障诊断日志。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeStats {
    /// inode 总数
    pub total_inodes: u32,
    /// 空闲 inode 数
    pub free_inodes: u32,
    /// 块总数
    pub total_blocks: u64,
    /// 空闲块数
    pub free_blocks: u64,
}

impl VolumeStats {
    /// 已分配的 inode 数
    pub fn used_inodes(&self) -> u32 {
        self.total_inodes - self.free_inodes
    }
}

/// 底层 ext2 文件系统句柄
///
/// 挂载时打开一次，会话期间由桥接层独占持有。实现方负责
/// 内部互斥；本核心不加锁（见会话层的并发约定）。
pub trait Ext2Volume: Send + Sync {
    /// 分配一个新的 inode 号
    ///
    /// `parent` 影响分配局部性策略，`mode` 影响分配策略分组。
    /// 分配器并不在位图中标记该 inode，标记由 [`Ext2Volume::alloc_stats`] 完成。
    fn new_inode(&self, parent: u32, mode: FileMode) -> Result<u32, VolumeError>;

    /// 向父目录插入 (name, child, kind) 目录项
    ///
    /// 目录块写满时返回 [`VolumeError::DirNoSpace`]。
    fn link(&self, parent: u32, name: &str, child: u32, kind: DirentKind)
    -> Result<(), VolumeError>;

    /// 为父目录追加分配一个目录块
    fn expand_dir(&self, parent: u32) -> Result<(), VolumeError>;

    /// 读取 inode 记录
    fn read_inode(&self, ino: u32) -> Result<RawInode, VolumeError>;

    /// 写入新建 inode 的记录
    fn write_new_inode(&self, ino: u32, inode: &RawInode) -> Result<(), VolumeError>;

    /// 查询 inode 位图中该号是否已标记
    fn inode_in_use(&self, ino: u32) -> bool;

    /// 在位图中标记/清除 inode 并同步分配统计
    ///
    /// `delta` 为 +1 表示分配、-1 表示释放；`is_dir` 影响目录计数。
    fn alloc_stats(&self, ino: u32, delta: i32, is_dir: bool);

    /// 读取卷统计信息
    fn stats(&self) -> VolumeStats;
}
