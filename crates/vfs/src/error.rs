//! 文件系统错误类型
//!
//! 定义了与 POSIX 兼容的错误码，可通过 [`FsError::to_errno()`] 转换为
//! 桥接框架期望的负数状态码。

/// 文件系统错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// 文件不存在 (-ENOENT)
    NotFound,
    /// I/O 错误 (-EIO)
    IoError,
    /// 权限被拒绝 (-EACCES)
    PermissionDenied,
    /// 文件已存在 (-EEXIST)
    AlreadyExists,
    /// 不是目录 (-ENOTDIR)
    NotDirectory,
    /// 是目录 (-EISDIR)
    IsDirectory,
    /// 无效参数 (-EINVAL)
    InvalidArgument,
    /// 设备空间不足 (-ENOSPC)
    NoSpace,
    /// 只读文件系统 (-EROFS)
    ReadOnlyFs,
    /// 操作不支持 (-ENOTSUP)
    NotSupported,
}

impl FsError {
    /// 转换为桥接框架的状态码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::IoError => -5,
            FsError::PermissionDenied => -13,
            FsError::AlreadyExists => -17,
            FsError::NotDirectory => -20,
            FsError::IsDirectory => -21,
            FsError::InvalidArgument => -22,
            FsError::NoSpace => -28,
            FsError::ReadOnlyFs => -30,
            FsError::NotSupported => -95,
        }
    }
}
