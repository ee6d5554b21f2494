//! # Ext2 操作核心
//!
//! 本 crate 实现桥接框架的"创建普通文件"操作。底层磁盘结构
//! （inode 位图、目录块、inode 表）的读写委托给 [`Ext2Volume`]
//! 抽象的文件系统库；路径解析与 open 操作同样作为外部协作者注入。
//!
//! ## 模块
//!
//! - [`dirent`]: 目录项文件类型标签与模式分类器
//! - [`inode`]: 磁盘 inode 记录
//! - [`volume`]: 底层文件系统库接口
//! - [`ops`]: 桥接层运行时接口（时间、调用者凭证、路径解析）
//! - [`session`]: 挂载会话上下文
//! - [`create`]: 文件创建操作及其入口点

#![no_std]

extern crate alloc;

pub mod create;
pub mod dirent;
pub mod inode;
pub mod ops;
pub mod session;
pub mod volume;

pub use create::op_create;
pub use dirent::DirentKind;
pub use inode::RawInode;
pub use ops::{BridgeOps, PathResolver};
pub use session::MountSession;
pub use volume::{Ext2Volume, VolumeError, VolumeStats};
