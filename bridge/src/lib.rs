//! # e2bridge 宿主胶水层
//!
//! 把 [`ext2`] 操作核心接到用户态桥接框架上：提供系统时钟与
//! 请求凭证的 [`ext2::BridgeOps`] 实现。通用的请求分发循环、
//! 挂载参数解析与逐组件路径遍历属于框架一侧，不在本仓库内。
//!
//! 日志走 `log` facade，后端由宿主进程在启动时自行挂载。

pub mod ops_impl;

pub use ops_impl::{SystemBridgeOps, clear_request_cred, set_request_cred};
