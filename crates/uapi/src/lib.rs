//! 与桥接框架共用的 POSIX 定义
//!
//! 包含时间戳、调用者凭证和打开标志等基础类型，
//! 确保各 crate 之间使用一致的用户态 API 语义。

#![no_std]

pub mod cred;
pub mod fcntl;
pub mod time;
