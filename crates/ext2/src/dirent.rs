//! 目录项文件类型标签
//!
//! ext2 目录项在磁盘上用一个字节记录被引用对象的文件类型，
//! 取值即 `EXT2_FT_*` 常量。模式分类器把 POSIX mode 映射到
//! 此标签，等价于按固定顺序套用 `S_ISREG`/`S_ISDIR`/... 宏。

use vfs::FileMode;

/// 目录项中的文件类型标签（磁盘取值）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DirentKind {
    /// 未知类型
    Unknown = 0,
    /// 普通文件
    Regular = 1,
    /// 目录
    Directory = 2,
    /// 字符设备
    CharDevice = 3,
    /// 块设备
    BlockDevice = 4,
    /// 命名管道
    Fifo = 5,
    /// 套接字
    Socket = 6,
    /// 符号链接
    Symlink = 7,
}

impl DirentKind {
    /// 根据 POSIX mode 的类型位选出标签
    ///
    /// 判断顺序与标准类型检测宏一致；无法识别的位组合返回
    /// [`DirentKind::Unknown`]，不产生错误。
    pub fn from_mode(mode: FileMode) -> Self {
        let ft = mode.type_bits();
        if ft == FileMode::S_IFREG.bits() {
            DirentKind::Regular
        } else if ft == FileMode::S_IFDIR.bits() {
            DirentKind::Directory
        } else if ft == FileMode::S_IFCHR.bits() {
            DirentKind::CharDevice
        } else if ft == FileMode::S_IFBLK.bits() {
            DirentKind::BlockDevice
        } else if ft == FileMode::S_IFIFO.bits() {
            DirentKind::Fifo
        } else if ft == FileMode::S_IFSOCK.bits() {
            DirentKind::Socket
        } else if ft == FileMode::S_IFLNK.bits() {
            DirentKind::Symlink
        } else {
            DirentKind::Unknown
        }
    }
}
