//! 此模块定义了视频详情页中"相关推荐"条目的数据结构。

use serde::{Deserialize, Serialize};

/// 一条相关视频推荐。番剧等 PGC 内容也会出现在这里，由 `goto` 区分。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedVideo {
    /// 稿件 avid。
    pub aid: Option<u64>,
    /// 标题。
    pub title: Option<String>,
    /// 封面图片 URL。
    pub pic: Option<String>,
    /// 时长，单位为秒。
    pub duration: Option<i64>,
    /// 统计数据。
    pub stat: Option<RelatedStat>,
    /// 作者。
    #[serde(rename = "owner")]
    pub author: Option<RelatedAuthor>,
    /// 跳转类型，`av` 表示普通视频。
    pub goto: Option<String>,
    /// PGC 内容的评分。
    pub rating: Option<f64>,
}

/// 相关视频的统计数据。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedStat {
    /// 播放数。
    pub view: Option<i64>,
    /// 弹幕数。
    pub danmaku: Option<i64>,
    /// 评论数。
    pub reply: Option<i64>,
    /// 点赞数。
    pub like: Option<i64>,
}

/// 相关视频的作者。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedAuthor {
    /// 用户 ID。
    pub mid: Option<u64>,
    /// 昵称。
    pub name: Option<String>,
    /// 头像。
    pub face: Option<String>,
}
