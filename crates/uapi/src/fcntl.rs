//! 文件打开标志
//!
//! 与 Linux `fcntl.h` 的 O_* 常量取值一致。

bitflags::bitflags! {
    /// open(2) 标志位
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只写
        const O_WRONLY = 0o1;
        /// 读写
        const O_RDWR = 0o2;
        /// 不存在则创建
        const O_CREAT = 0o100;
        /// 与 O_CREAT 连用，已存在则失败
        const O_EXCL = 0o200;
        /// 截断为零长度
        const O_TRUNC = 0o1000;
        /// 追加写
        const O_APPEND = 0o2000;
    }
}
