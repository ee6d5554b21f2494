//! 磁盘 inode 记录
//!
//! 经典 ext2 布局的定长元数据结构。创建操作只填充 mode、属主、
//! 三个时间戳、链接数和大小；块指针等字段对本核心不透明，
//! 保持零值交由后续的写路径填充。

/// ext2 磁盘 inode 记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInode {
    /// 文件类型与权限位
    pub mode: u16,
    /// 属主用户 ID
    pub uid: u16,
    /// 文件大小（字节）
    pub size: u32,
    /// 访问时间（秒）
    pub atime: u32,
    /// 状态改变时间（秒）
    pub ctime: u32,
    /// 修改时间（秒）
    pub mtime: u32,
    /// 删除时间（秒）
    pub dtime: u32,
    /// 属主组 ID
    pub gid: u16,
    /// 硬链接数
    pub links_count: u16,
    /// 占用的块数（512B 为单位）
    pub blocks: u32,
    /// 文件标志
    pub flags: u32,
    /// 块指针（12 直接 + 1 间接 + 1 二级 + 1 三级）
    pub block: [u32; 15],
}
