//! 定义了与具体上游形态无关的规范化媒体条目 `MediaItem`。
//!
//! 所有来源适配器在拿到各自形态的原始数据后，都需要转换成这里的目标格式。
//! 字段均为可以直接展示的字符串，数字类字段已经过格式化。

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    error::NormalizationWarning,
    model::{publisher::Publisher, source::SourcePayload},
};

/// 追加在封面地址之后的裁剪参数，限制图片分辨率以减轻界面和内存压力。
pub const COVER_SIZE_SUFFIX: &str = "@400w_250h_1c_100q.jpg";

/// 时长没有意义时（例如番剧推荐卡片）使用的占位文本。
pub const DURATION_PLACEHOLDER: &str = "--";

/// 根据原始封面地址生成用于展示的缩略图地址。
///
/// 只做字符串拼接，不校验地址是否合法，空字符串同样会得到后缀本身。
#[must_use]
pub fn derive_display_cover(original: &str) -> String {
    format!("{original}{COVER_SIZE_SUFFIX}")
}

/// 条目的内容类别，决定播放和展示方式。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// 普通投稿视频。
    #[default]
    Video,
    /// 番剧、影视等 PGC 内容。
    Pgc,
    /// 直播间。
    Live,
}

/// 一对封面地址：上游给出的原始地址，以及由它推导出的展示地址。
///
/// 字段不对外开放，唯一的构造途径是 [`CoverUrl::new`]，
/// 因此展示地址始终等于 `original + COVER_SIZE_SUFFIX`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CoverUrl {
    original: String,
    display: String,
}

impl CoverUrl {
    /// 从原始封面地址创建。
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let display = derive_display_cover(&original);
        Self { original, display }
    }

    /// 上游给出的原始封面地址，需要全分辨率时使用。
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// 限制了分辨率的展示地址。
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// 规范化后的媒体条目，可能是视频、PGC 剧集或直播间。
///
/// 每次适配器调用都会完整地构造一个新的实例；本类型不提供任何原地修改的方法。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    /// 标题，上游缺失时为空字符串。
    pub title: String,
    /// 请求或播放该条目时使用的标识符，永远不为空。
    pub identifier: String,
    /// 内容类别。
    pub category: MediaCategory,
    /// 发布者（UP 主、主播等）。
    pub publisher: Publisher,
    /// 封面地址。
    pub cover: CoverUrl,
    /// 格式化后的时长文本。
    pub duration_text: String,
    /// 播放数。
    pub play_count_text: String,
    /// 评论数。
    pub reply_count_text: String,
    /// 弹幕数。
    pub danmaku_count_text: String,
    /// 点赞数。
    pub like_count_text: String,
    /// 直播间观看人数。
    pub viewer_count_text: String,
    /// 分区名。
    pub partition_name: String,
    /// 分区 ID，`0` 表示未知。
    pub partition_id: u32,
    /// 附加文本，具体含义取决于来源（推荐理由、排行榜分数、评分等）。
    pub additional_text: String,
    /// 转换过程中产生的非致命警告。
    pub warnings: Vec<NormalizationWarning>,
    /// 原始的上游数据，原样保留。
    #[serde(skip)]
    pub source: SourcePayload,
}

impl MediaItem {
    /// 所有适配器共用的基础条目：必需字段由调用方给出，其余字段全部取默认值。
    ///
    /// 适配器在此基础上通过结构体更新语法逐个覆盖字段。
    #[must_use]
    pub fn base(
        identifier: String,
        title: String,
        cover: &str,
        publisher: Publisher,
        source: SourcePayload,
    ) -> Self {
        Self {
            title,
            identifier,
            category: MediaCategory::default(),
            publisher,
            cover: CoverUrl::new(cover),
            duration_text: String::new(),
            play_count_text: String::new(),
            reply_count_text: String::new(),
            danmaku_count_text: String::new(),
            like_count_text: String::new(),
            viewer_count_text: String::new(),
            partition_name: String::new(),
            partition_id: 0,
            additional_text: String::new(),
            warnings: Vec::new(),
            source,
        }
    }

    /// 是否是直播间。
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.category == MediaCategory::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_derive_display_cover_appends_suffix() {
        assert_eq!(
            derive_display_cover("http://x/y.jpg"),
            "http://x/y.jpg@400w_250h_1c_100q.jpg"
        );
        assert_eq!(derive_display_cover(""), COVER_SIZE_SUFFIX);
    }

    #[test]
    fn test_derive_display_cover_does_not_validate_url() {
        assert_eq!(
            derive_display_cover("not a url?a=1"),
            "not a url?a=1@400w_250h_1c_100q.jpg"
        );
    }

    #[test]
    fn test_cover_url_keeps_original_and_display_in_sync() {
        let cover = CoverUrl::new("https://i0.hdslb.com/bfs/archive/a.jpg");
        assert_eq!(cover.original(), "https://i0.hdslb.com/bfs/archive/a.jpg");
        assert_eq!(cover.display(), derive_display_cover(cover.original()));
    }

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!(MediaCategory::from_str("PGC").unwrap(), MediaCategory::Pgc);
        assert_eq!(MediaCategory::from_str("live").unwrap(), MediaCategory::Live);
        assert!(MediaCategory::from_str("article").is_err());
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in MediaCategory::iter() {
            let text = category.to_string();
            assert_eq!(MediaCategory::from_str(&text).unwrap(), category);
        }
        assert_eq!(MediaCategory::default(), MediaCategory::Video);
    }
}
