//! 桥接层运行时接口
//!
//! 此模块定义核心操作需要的外部依赖：当前时间、请求发起者的
//! 凭证，以及把路径解析为 inode 的查找操作。桥接层在挂载时
//! 提供实现，并通过会话上下文显式传入，不使用进程级全局注册。

use crate::inode::RawInode;
use uapi::cred::Credentials;
use uapi::time::TimeSpec;
use vfs::FsError;

/// 桥接层运行时操作
pub trait BridgeOps: Send + Sync {
    /// 获取当前时间
    fn timespec_now(&self) -> TimeSpec;

    /// 获取请求发起者的凭证
    ///
    /// 桥接框架无法提供调用上下文时返回 `None`，新文件的属主
    /// 字段保持零值默认（即 root）。
    fn caller_cred(&self) -> Option<Credentials>;
}

/// 路径到 inode 的解析操作
///
/// 逐组件遍历由桥接层的查找逻辑实现；创建操作只用它解析
/// 父目录路径，解析失败原样上报。
pub trait PathResolver: Send + Sync {
    /// 解析 `path`，返回 inode 号及其记录
    fn resolve(&self, path: &str) -> Result<(u32, RawInode), FsError>;
}
