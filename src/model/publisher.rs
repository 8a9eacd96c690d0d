//! 内容发布者（UP 主、主播等）。

use serde::Serialize;

/// 代表一位发布者的通用模型。
///
/// 只能通过 [`PublisherBuilder`](crate::toolkit::publisher::PublisherBuilder) 构造。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Publisher {
    /// 显示名称。
    pub name: String,
    /// 头像地址。
    pub avatar_url: Option<String>,
    /// 用户 ID，[`Publisher::UNSET_ID`] 表示未知。
    pub user_id: u64,
}

impl Publisher {
    /// 未提供用户 ID 时使用的哨兵值。
    pub const UNSET_ID: u64 = 0;

    /// 是否带有有效的用户 ID。
    #[must_use]
    pub fn has_user_id(&self) -> bool {
        self.user_id != Self::UNSET_ID
    }
}
