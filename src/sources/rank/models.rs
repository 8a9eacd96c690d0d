//! 此模块定义了排行榜接口 (`/x/v2/rank`) 返回条目的数据结构。

use serde::{Deserialize, Serialize};

/// 排行榜中的一个视频。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankItem {
    /// 视频标题。
    pub title: Option<String>,
    /// 封面图片 URL。
    pub cover: Option<String>,
    /// 播放参数，通常是 av 号。
    pub param: Option<String>,
    /// 时长，单位为秒 (s)。
    pub duration: Option<i64>,
    /// 播放数。
    pub play: Option<i64>,
    /// 评论数。
    pub reply: Option<i64>,
    /// 弹幕数。
    pub danmaku: Option<i64>,
    /// 点赞数。
    pub like: Option<i64>,
    /// UP 主昵称。
    pub name: Option<String>,
    /// UP 主头像。
    pub face: Option<String>,
    /// UP 主 ID。该接口以字符串形式给出。
    pub mid: Option<String>,
    /// 分区名。
    pub rname: Option<String>,
    /// 分区 ID。
    pub rid: Option<u32>,
    /// 排行榜综合得分。
    pub pts: Option<i64>,
}
