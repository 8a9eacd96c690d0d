//! 此模块定义了直播相关接口返回的直播间数据结构。

use serde::{Deserialize, Serialize};

// =================================================================
// 关注的直播间 (`/xlive/app-interface/v1/relation/liveAnchor`)
// =================================================================

/// 用户关注的、正在直播的直播间。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveFollowRoom {
    /// 直播间标题。
    pub title: Option<String>,
    /// 直播间 ID。
    #[serde(rename = "roomid")]
    pub room_id: Option<u64>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 当前观看人数。
    #[serde(rename = "online")]
    pub viewer_count: Option<i64>,
    /// 主播昵称。
    #[serde(rename = "uname")]
    pub user_name: Option<String>,
    /// 主播头像。
    #[serde(rename = "face")]
    pub user_avatar: Option<String>,
    /// 主播 ID。
    #[serde(rename = "uid")]
    pub user_id: Option<u64>,
    /// 展示用的分区名。
    #[serde(rename = "area_v2_name")]
    pub display_area_name: Option<String>,
    /// 展示用的分区 ID。该接口以字符串形式给出。
    #[serde(rename = "area_v2_id")]
    pub display_area_id: Option<String>,
}

// =================================================================
// 直播间卡片 (`/xlive/app-interface/v2/index/feed`)
// =================================================================

/// 直播首页中的直播间卡片。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveRoomCard {
    /// 直播间标题。
    pub title: Option<String>,
    /// 直播间 ID。
    pub room_id: Option<u64>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 封面左下角内容，通常是主播昵称。
    pub cover_left_content: Option<CoverContent>,
    /// 封面右下角内容，通常是已格式化的观看人数。
    pub cover_right_content: Option<CoverContent>,
    /// 分区名。
    pub area_name: Option<String>,
    /// 分区 ID。该接口以字符串形式给出。
    pub area_id: Option<String>,
}

/// 封面角标中的文本内容。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverContent {
    /// 文本。
    pub text: Option<String>,
}
