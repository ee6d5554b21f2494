//! 文件创建操作
//!
//! 在父目录中分配并链接一个新的普通文件，然后初始化其磁盘记录。
//! 三个磁盘结构（inode 位图、目录块、inode 表）的写入彼此独立，
//! 没有回滚：位图标记成功而记录写入失败时，会留下一个已分配但
//! 全零记录的 inode，只能靠一致性检查工具回收。
//!
//! 操作对已存在的路径幂等：能直接 open 成功就不做任何分配。

use vfs::{FileHandle, FileMode, FsError, split_path};

use crate::dirent::DirentKind;
use crate::inode::RawInode;
use crate::session::MountSession;
use crate::volume::VolumeError;

impl MountSession {
    /// 创建普通文件
    ///
    /// 成功返回后 `handle` 已由 open 操作填充，新 inode 的记录
    /// 完整可见：链接数为 1、大小为 0、三个时间戳一致。
    pub fn create(
        &self,
        path: &str,
        mode: FileMode,
        handle: &mut FileHandle,
    ) -> Result<(), FsError> {
        // 幂等快速路径：路径已可打开则视为创建成功
        if self.opener.open(path, handle).is_ok() {
            return Ok(());
        }

        let (parent_path, name) = split_path(path).map_err(|e| {
            log::warn!("create: 路径 {} 无法拆分（不应出现）", path);
            e
        })?;
        log::debug!("create: parent = {}, child = {}", parent_path, name);

        // 父目录解析失败原样上报，不翻译错误码
        let (parent_ino, parent_inode) = self.resolver.resolve(&parent_path)?;

        // 只有耗尽算空间不足，其余分配器失败一律按 I/O 错误上报
        let new_ino = self.volume.new_inode(parent_ino, mode).map_err(|e| {
            log::error!("create: 分配 inode 失败 (parent = {}): {:?}", parent_ino, e);
            match e {
                VolumeError::NoSpace => FsError::NoSpace,
                _ => FsError::IoError,
            }
        })?;

        self.link_into_parent(parent_ino, &parent_inode, &name, new_ino, mode)?;

        // 分配器刚交出的号不应已在位图中标记；出现说明位图与分配器
        // 早已不一致。此时目录项已写入，中止只会多留一个悬空项，
        // 因此记录异常后继续覆盖写该槽位。
        if self.volume.inode_in_use(new_ino) {
            log::warn!("create: inode {} 已在位图中标记", new_ino);
        }

        self.volume.alloc_stats(new_ino, 1, false);

        let now = self.ops.timespec_now();
        let mut inode = RawInode {
            mode: mode.bits() as u16,
            atime: now.tv_sec as u32,
            ctime: now.tv_sec as u32,
            mtime: now.tv_sec as u32,
            links_count: 1,
            size: 0,
            ..RawInode::default()
        };
        if let Some(cred) = self.ops.caller_cred() {
            inode.uid = cred.uid as u16;
            inode.gid = cred.gid as u16;
        }

        self.volume.write_new_inode(new_ino, &inode).map_err(|e| {
            log::error!("create: 写入 inode {} 的记录失败: {:?}", new_ino, e);
            FsError::IoError
        })?;

        // 收尾：复用 open 填充调用者的句柄。此时文件已在磁盘上
        // 存在，open 失败仍上报 I/O 错误，由调用者自行处理。
        self.opener.open(path, handle).map_err(|e| {
            log::error!("create: 收尾 open {} 失败: {:?}", path, e);
            FsError::IoError
        })?;

        Ok(())
    }

    /// 带扩容重试的目录项插入
    ///
    /// 目录块写满时请求扩容后重试。每轮重试前父目录大小必须
    /// 严格增长，否则判定扩容无效并终止，保证循环必然结束。
    fn link_into_parent(
        &self,
        parent_ino: u32,
        parent_inode: &RawInode,
        name: &str,
        new_ino: u32,
        mode: FileMode,
    ) -> Result<(), FsError> {
        let kind = DirentKind::from_mode(mode);
        let mut dir_size = parent_inode.size;

        loop {
            match self.volume.link(parent_ino, name, new_ino, kind) {
                Ok(()) => return Ok(()),
                Err(VolumeError::DirNoSpace) => {
                    log::debug!("create: 目录 {} 已满，扩容后重试", parent_ino);
                    self.volume.expand_dir(parent_ino).map_err(|e| {
                        log::error!("create: 扩容目录 {} 失败: {:?}", parent_ino, e);
                        FsError::NoSpace
                    })?;

                    let grown = self
                        .volume
                        .read_inode(parent_ino)
                        .map_err(|_| FsError::IoError)?;
                    if grown.size <= dir_size {
                        log::error!(
                            "create: 扩容目录 {} 后大小未增长 ({} -> {})",
                            parent_ino,
                            dir_size,
                            grown.size
                        );
                        return Err(FsError::IoError);
                    }
                    dir_size = grown.size;
                }
                Err(e) => {
                    let stats = self.volume.stats();
                    log::error!(
                        "create: 链接 {} (ino = {}) 到目录 {} 失败: {:?}, 卷状态: {:?}",
                        name,
                        new_ino,
                        parent_ino,
                        e,
                        stats
                    );
                    return Err(FsError::IoError);
                }
            }
        }
    }
}

/// 桥接框架的创建操作入口点
///
/// 返回 0 表示成功，否则为负的 POSIX 错误码。
pub fn op_create(session: &MountSession, path: &str, mode: u32, handle: &mut FileHandle) -> isize {
    log::debug!("op_create: path = {}, mode = 0{:o}", path, mode);
    match session.create(path, FileMode::from_bits_truncate(mode), handle) {
        Ok(()) => 0,
        Err(e) => e.to_errno(),
    }
}
