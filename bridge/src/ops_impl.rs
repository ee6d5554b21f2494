//! BridgeOps trait 实现
//!
//! 时间取自系统时钟；调用者凭证由分发层在进入操作前通过
//! [`set_request_cred`] 写入线程本地存储（对应框架的请求上下文），
//! 操作返回后清除。拿不到上下文时凭证视为不可用。

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use ext2::BridgeOps;
use uapi::cred::Credentials;
use uapi::time::TimeSpec;

thread_local! {
    static REQUEST_CRED: Cell<Option<Credentials>> = const { Cell::new(None) };
}

/// 记录当前请求的调用者凭证
pub fn set_request_cred(cred: Credentials) {
    REQUEST_CRED.with(|c| c.set(Some(cred)));
}

/// 清除请求凭证（请求结束时由分发层调用）
pub fn clear_request_cred() {
    REQUEST_CRED.with(|c| c.set(None));
}

/// 接系统时钟与请求上下文的运行时操作
pub struct SystemBridgeOps;

impl BridgeOps for SystemBridgeOps {
    fn timespec_now(&self) -> TimeSpec {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        TimeSpec {
            tv_sec: elapsed.as_secs() as i64,
            tv_nsec: elapsed.subsec_nanos() as i64,
        }
    }

    fn caller_cred(&self) -> Option<Credentials> {
        REQUEST_CRED.with(|c| c.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_cred_roundtrip() {
        let ops = SystemBridgeOps;
        assert_eq!(ops.caller_cred(), None);

        set_request_cred(Credentials { uid: 1000, gid: 100 });
        assert_eq!(
            ops.caller_cred(),
            Some(Credentials { uid: 1000, gid: 100 })
        );

        clear_request_cred();
        assert_eq!(ops.caller_cred(), None);
    }

    #[test]
    fn test_system_clock_sane() {
        let now = SystemBridgeOps.timespec_now();
        // 2020-01-01 之后
        assert!(now.tv_sec > 1_577_836_800);
        assert!(now.tv_nsec < 1_000_000_000);
    }
}
