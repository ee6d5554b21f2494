//! 桥接层运行时操作的 Mock 实现

use ext2::BridgeOps;
use uapi::cred::Credentials;
use uapi::time::TimeSpec;

/// 固定时钟与可选凭证的运行时操作
pub struct MockBridgeOps {
    now: TimeSpec,
    cred: Option<Credentials>,
}

impl MockBridgeOps {
    /// 指定"当前时间"与调用者凭证
    pub fn new(now: TimeSpec, cred: Option<Credentials>) -> Self {
        Self { now, cred }
    }

    /// 凭证不可用的变体
    pub fn without_cred(now: TimeSpec) -> Self {
        Self::new(now, None)
    }
}

impl BridgeOps for MockBridgeOps {
    fn timespec_now(&self) -> TimeSpec {
        self.now
    }

    fn caller_cred(&self) -> Option<Credentials> {
        self.cred
    }
}
