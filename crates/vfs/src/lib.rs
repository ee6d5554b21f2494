//! 桥接层文件系统词汇表
//!
//! 此 crate 提供桥接框架与具体文件系统核心之间共用的抽象：
//!
//! - [`FsError`] - POSIX 兼容的错误类型
//! - [`FileMode`] - 文件类型与权限位
//! - [`FileHandle`] / [`FileOpener`] - 输出句柄与打开操作的接口
//! - 路径拆分工具（仅限末级分隔符拆分）

#![no_std]

extern crate alloc;

mod error;
mod file;
mod mode;
mod path;

pub use error::FsError;
pub use file::{FileHandle, FileOpener};
pub use mode::FileMode;
pub use path::split_path;
