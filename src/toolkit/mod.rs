//! 适配器依赖的外部协作者：数字格式化与发布者构造。
//!
//! 协作者通过 [`AdapterContext`] 显式传入适配器，不依赖任何全局状态。

pub mod number;
pub mod publisher;

use crate::{
    config::NormalizerConfig,
    error::Result,
    model::publisher::Publisher,
    toolkit::{number::NumberToolkit, publisher::PublisherBuilder},
};

/// 一次适配器调用所需的全部协作者。
#[derive(Clone, Copy)]
pub struct AdapterContext<'a> {
    numbers: &'a dyn NumberToolkit,
    publishers: &'a dyn PublisherBuilder,
    config: &'a NormalizerConfig,
}

impl<'a> AdapterContext<'a> {
    /// 创建一个新的上下文。
    pub fn new(
        numbers: &'a dyn NumberToolkit,
        publishers: &'a dyn PublisherBuilder,
        config: &'a NormalizerConfig,
    ) -> Self {
        Self {
            numbers,
            publishers,
            config,
        }
    }

    /// 当前生效的配置。
    pub fn config(&self) -> &NormalizerConfig {
        self.config
    }

    /// 秒数 -> 时长文本。
    pub fn duration_from_seconds(&self, seconds: i64) -> Result<String> {
        Ok(self.numbers.duration_text(seconds)?)
    }

    /// 已格式化的时长文本 -> 规范化的时长文本。缺失时为空字符串。
    pub fn duration_from_text(&self, text: Option<&str>) -> Result<String> {
        match text {
            Some(text) => Ok(self.numbers.normalize_duration_text(text)?),
            None => Ok(String::new()),
        }
    }

    /// 可选的秒数 -> 时长文本。缺失时为空字符串。
    pub fn optional_duration(&self, seconds: Option<i64>) -> Result<String> {
        seconds.map_or(Ok(String::new()), |s| self.duration_from_seconds(s))
    }

    /// 可选的数量 -> 缩写文本。缺失时为空字符串。
    pub fn count(&self, count: Option<i64>) -> Result<String> {
        match count {
            Some(count) => Ok(self.numbers.count_text(count)?),
            None => Ok(String::new()),
        }
    }

    /// 构造发布者。
    pub fn publisher(
        &self,
        name: Option<&str>,
        avatar_url: Option<&str>,
        user_id: Option<u64>,
    ) -> Publisher {
        self.publishers.build(name.unwrap_or_default(), avatar_url, user_id)
    }
}
