//! 路径拆分工具
//!
//! 创建类操作只做一种路径解析：在最后一个 `/` 处把路径拆成
//! （父目录路径，末级名字）。完整的逐组件遍历由外部解析器负责，
//! 这里不做规范化，也不处理 `.` / `..`。

use alloc::string::String;

use crate::FsError;

/// 在最后一个分隔符处拆分路径
///
/// - `"/foo/bar.txt"` → `("/foo", "bar.txt")`
/// - `"/hello"` → `("/", "hello")`
///
/// 桥接框架传入的路径总是含分隔符的绝对路径；不含分隔符视为
/// 内部一致性错误，返回 [`FsError::NotFound`]。以 `/` 结尾或
/// 末级名字为空返回 [`FsError::InvalidArgument`]。
pub fn split_path(path: &str) -> Result<(String, String), FsError> {
    if path.ends_with('/') && path.len() > 1 {
        return Err(FsError::InvalidArgument);
    }

    let pos = path.rfind('/').ok_or(FsError::NotFound)?;

    let parent = if pos == 0 {
        String::from("/")
    } else {
        String::from(&path[..pos])
    };
    let name = String::from(&path[pos + 1..]);

    if name.is_empty() {
        return Err(FsError::InvalidArgument);
    }

    Ok((parent, name))
}
