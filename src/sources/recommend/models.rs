//! 此模块定义了首页推荐接口 (`/x/v2/feed/index`) 返回的卡片数据结构。
//!
//! 推荐流中同时存在两种卡片：旧版的扁平推荐卡片，以及带 `small_cover_v5` 主体的通用卡片。

use serde::{Deserialize, Serialize};

// =================================================================
// 推荐卡片
// =================================================================

/// 推荐卡片，可能是普通视频，也可能是番剧等 PGC 内容。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendCard {
    /// 标题。
    pub title: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 播放参数。
    pub param: Option<String>,
    /// 卡片类型，`av` 表示视频，其余（如 `bangumi`）表示 PGC 内容。
    pub card_goto: Option<String>,
    /// 已格式化的播放数文本。
    #[serde(rename = "cover_left_text_1")]
    pub play_count_text: Option<String>,
    /// 已格式化的次要状态文本：视频卡片是弹幕数，番剧卡片是追番数。
    #[serde(rename = "cover_left_text_2")]
    pub sub_status_text: Option<String>,
    /// 已格式化的时长文本。
    #[serde(rename = "cover_right_text")]
    pub duration_text: Option<String>,
    /// 推荐理由。
    #[serde(rename = "rcmd_reason")]
    pub recommend_reason: Option<String>,
    /// 卡片底部的描述，番剧卡片在这里给出出品方名称。
    #[serde(rename = "desc_button")]
    pub description: Option<TextPart>,
    /// 视频卡片附带的 UP 主和分区信息。
    #[serde(rename = "args")]
    pub card_args: Option<CardArgs>,
    /// 视频卡片附带的播放器参数。
    pub player_args: Option<PlayerArgs>,
}

/// 仅包含一段文本的子结构。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPart {
    /// 文本内容。
    pub text: Option<String>,
}

/// 推荐卡片的附加参数。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardArgs {
    /// UP 主 ID。
    #[serde(rename = "up_id")]
    pub publisher_id: Option<u64>,
    /// UP 主昵称。
    #[serde(rename = "up_name")]
    pub publisher_name: Option<String>,
    /// 分区 ID。
    #[serde(rename = "rid")]
    pub partition_id: Option<u32>,
    /// 分区名。
    #[serde(rename = "rname")]
    pub partition_name: Option<String>,
}

/// 推荐卡片的播放器参数。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerArgs {
    /// 视频 av 号。
    pub aid: Option<u64>,
    /// 时长，单位为秒 (s)。
    pub duration: Option<i64>,
}

// =================================================================
// 小封面通用卡片
// =================================================================

/// 通用卡片。目前只处理小封面 (`small_cover_v5`) 样式。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallCoverCard {
    /// 小封面卡片主体。
    pub small_cover_v5: Option<SmallCoverV5>,
}

/// 小封面卡片主体。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallCoverV5 {
    /// 卡片的公共部分。
    pub base: Option<CardBase>,
    /// 右侧第一行描述，通常是 UP 主昵称。
    pub right_desc_1: Option<String>,
    /// 右侧第二行描述，通常是已格式化的播放数。
    pub right_desc_2: Option<String>,
    /// 封面右下角文本，通常是已格式化的时长。
    pub cover_right_text_1: Option<String>,
    /// 推荐理由标签。
    pub rcmd_reason_style: Option<TextPart>,
}

/// 通用卡片的公共部分。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardBase {
    /// 标题。
    pub title: Option<String>,
    /// 播放参数。
    pub param: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
}
