//! 此模块定义了分区视频列表接口 (`/x/web-interface/dynamic/region`) 返回条目的数据结构。

use serde::{Deserialize, Serialize};

/// 分区列表中的一个视频。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionVideo {
    /// 视频标题。
    pub title: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 播放参数，通常是 av 号。
    pub param: Option<String>,
    /// 时长，单位为秒 (s)。
    pub duration: Option<i64>,
    /// 播放数。
    #[serde(rename = "play")]
    pub play_count: Option<i64>,
    /// 评论数。
    #[serde(rename = "reply")]
    pub reply_count: Option<i64>,
    /// 弹幕数。
    #[serde(rename = "danmaku")]
    pub danmaku_count: Option<i64>,
    /// 点赞数。
    #[serde(rename = "like")]
    pub like_count: Option<i64>,
    /// UP 主昵称。
    #[serde(rename = "name")]
    pub publisher: Option<String>,
    /// UP 主头像。
    #[serde(rename = "face")]
    pub publisher_avatar: Option<String>,
    /// UP 主 ID。
    #[serde(rename = "mid")]
    pub publisher_id: Option<u64>,
    /// 分区名。
    #[serde(rename = "rname")]
    pub partition_name: Option<String>,
    /// 分区 ID。
    #[serde(rename = "rid")]
    pub partition_id: Option<u32>,
}
