//! 输出句柄与打开操作接口
//!
//! 桥接框架为每个请求提供一个输出句柄；"打开已有文件"由外部操作实现，
//! 此处仅声明其接口。创建操作既把它当作幂等快速路径，也在收尾时用它
//! 填充调用者的句柄。

use uapi::fcntl::OpenFlags;

use crate::FsError;

/// 打开文件后交还给桥接框架的会话句柄
///
/// 由 [`FileOpener::open`] 负责填充；核心操作本身不解释其内容。
#[derive(Debug, Clone, Copy)]
pub struct FileHandle {
    /// 文件会话标识（由 open 实现分配）
    pub fh: u64,
    /// 打开标志
    pub flags: OpenFlags,
}

impl FileHandle {
    /// 构造一个尚未填充的句柄
    pub fn empty(flags: OpenFlags) -> Self {
        Self { fh: 0, flags }
    }
}

impl Default for FileHandle {
    fn default() -> Self {
        Self::empty(OpenFlags::empty())
    }
}

/// "打开已有文件"操作接口
///
/// 对应桥接框架的 open 操作：路径可解析则填充句柄并返回成功。
pub trait FileOpener: Send + Sync {
    /// 打开 `path` 指向的已有文件，成功时填充 `handle`
    fn open(&self, path: &str, handle: &mut FileHandle) -> Result<(), FsError>;
}
