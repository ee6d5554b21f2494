//! 调用者凭证

/// 请求发起者的用户/组标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    /// 用户 ID
    pub uid: u32,
    /// 组 ID
    pub gid: u32,
}
