//! 此模块定义了用户空间投稿列表 (`/x/v2/space/archive/cursor`) 中的条目。

use serde::{Deserialize, Serialize};

/// 用户空间中的一条投稿。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSpaceVideo {
    /// 标题。
    pub title: Option<String>,
    /// 投稿参数，通常是 avid。
    pub param: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 时长，单位为秒。
    pub duration: Option<i64>,
    /// 播放数。
    pub play: Option<i64>,
    /// 弹幕数。
    pub danmaku: Option<i64>,
    /// 发布者昵称。
    pub author: Option<String>,
    /// 分区名。
    #[serde(rename = "tname")]
    pub partition_name: Option<String>,
    /// 是否为 PGC 内容。
    pub is_pgc: bool,
}
