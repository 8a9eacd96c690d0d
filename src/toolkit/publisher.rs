//! 发布者构造器。

use crate::model::publisher::Publisher;

/// 从各种形态的原始信息（名称 + 头像 + ID、仅名称、名称 + ID 等）构造 [`Publisher`]。
pub trait PublisherBuilder {
    /// 构造一个新的发布者。缺失的头像与 ID 使用默认值。
    fn build(&self, name: &str, avatar_url: Option<&str>, user_id: Option<u64>) -> Publisher;
}

/// 默认的发布者构造器。
///
/// 去掉名称两侧的空白，空头像视为缺失，协议相对的头像地址补全为 `https:`。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPublisherBuilder;

impl PublisherBuilder for DefaultPublisherBuilder {
    fn build(&self, name: &str, avatar_url: Option<&str>, user_id: Option<u64>) -> Publisher {
        let avatar_url = avatar_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| {
                if url.starts_with("//") {
                    format!("https:{url}")
                } else {
                    url.to_string()
                }
            });

        Publisher {
            name: name.trim().to_string(),
            avatar_url,
            user_id: user_id.unwrap_or(Publisher::UNSET_ID),
        }
    }
}
