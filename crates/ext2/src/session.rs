//! 挂载会话上下文
//!
//! 把文件系统句柄与各外部协作者收拢为一个显式传递的会话对象，
//! 生命周期与挂载相同。并发约定：桥接框架可以并发分发请求，
//! 但位图/分配器缓存的互斥由 [`Ext2Volume`] 实现或更外层的锁
//! 提供，会话本身不加锁。

use alloc::sync::Arc;

use crate::ops::{BridgeOps, PathResolver};
use crate::volume::Ext2Volume;
use vfs::FileOpener;

/// 一次挂载对应的操作上下文
pub struct MountSession {
    pub(crate) volume: Arc<dyn Ext2Volume>,
    pub(crate) resolver: Arc<dyn PathResolver>,
    pub(crate) opener: Arc<dyn FileOpener>,
    pub(crate) ops: Arc<dyn BridgeOps>,
}

impl MountSession {
    /// 组装挂载会话
    pub fn new(
        volume: Arc<dyn Ext2Volume>,
        resolver: Arc<dyn PathResolver>,
        opener: Arc<dyn FileOpener>,
        ops: Arc<dyn BridgeOps>,
    ) -> Self {
        Self {
            volume,
            resolver,
            opener,
            ops,
        }
    }
}
