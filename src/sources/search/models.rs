//! 此模块定义了搜索接口 (`/x/v2/search/type`) 返回的结果条目。

use serde::{Deserialize, Serialize};

// =================================================================
// 视频搜索结果
// =================================================================

/// 视频搜索结果中的一条。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearchItem {
    /// 标题。
    pub title: Option<String>,
    /// 视频参数，通常是 avid。
    pub param: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 播放数。
    pub play: Option<i64>,
    /// 弹幕数。
    pub danmaku: Option<i64>,
    /// 作者昵称。
    pub author: Option<String>,
    /// 作者头像。
    #[serde(rename = "upic")]
    pub avatar: Option<String>,
    /// 作者 ID。
    pub mid: Option<u64>,
    /// 已格式化的时长，例如 `"4:13"`。
    pub duration: Option<String>,
}

// =================================================================
// 直播搜索结果
// =================================================================

/// 直播间搜索结果中的一条。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSearchItem {
    /// 直播间标题。
    pub title: Option<String>,
    /// 直播间 ID。
    #[serde(rename = "roomid")]
    pub room_id: Option<u64>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 主播昵称。
    #[serde(rename = "uname")]
    pub name: Option<String>,
    /// 主播 ID。
    #[serde(rename = "uid")]
    pub user_id: Option<u64>,
    /// 当前观看人数。
    #[serde(rename = "online")]
    pub viewer_count: Option<i64>,
    /// 分区名。
    pub area_name: Option<String>,
}
