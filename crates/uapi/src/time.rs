//! 时间戳定义
//!
//! 与 POSIX `struct timespec` 布局兼容。

/// 时间戳（秒 + 纳秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSpec {
    /// 秒
    pub tv_sec: i64,
    /// 纳秒
    pub tv_nsec: i64,
}

impl TimeSpec {
    /// 从秒数构造时间戳
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            tv_sec: secs,
            tv_nsec: 0,
        }
    }
}
