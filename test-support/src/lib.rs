//! 测试支持 crate
//!
//! 为宿主机 `cargo test` 提供各外部协作者的 Mock 实现：
//! 内存卷、路径解析器、open 操作与桥接层运行时操作。

pub mod mock;
