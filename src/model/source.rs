//! 上游数据形态的标签，以及原样保留原始数据的 `SourcePayload`。

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::sources::{
    live::models::{LiveFollowRoom, LiveRoomCard},
    partition::models::PartitionVideo,
    rank::models::RankItem,
    recommend::models::{RecommendCard, SmallCoverCard},
    relate::models::RelatedVideo,
    search::models::{LiveSearchItem, VideoSearchItem},
    space::models::UserSpaceVideo,
};

/// 本库支持的全部上游数据形态。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SourceShape {
    /// 分区视频列表。
    PartitionVideo,
    /// 排行榜条目。
    RankItem,
    /// 首页推荐卡片。
    RecommendCard,
    /// 小封面通用卡片。
    SmallCoverCard,
    /// 已关注的直播间。
    LiveFollowRoom,
    /// 直播间卡片。
    LiveRoomCard,
    /// 相关视频推荐。
    RelatedVideo,
    /// 视频搜索结果。
    VideoSearchItem,
    /// 直播搜索结果。
    LiveSearchItem,
    /// 用户空间视频条目。
    UserSpaceVideo,
}

/// 原始上游数据，按形态区分。
///
/// 作为 `MediaItem::source` 原样保留，也是 `MediaItemHelper::normalize_payload` 的输入。
#[derive(Debug, Clone, PartialEq)]
pub enum SourcePayload {
    /// 分区视频列表。
    PartitionVideo(PartitionVideo),
    /// 排行榜条目。
    RankItem(RankItem),
    /// 首页推荐卡片。
    RecommendCard(RecommendCard),
    /// 小封面通用卡片。
    SmallCoverCard(SmallCoverCard),
    /// 已关注的直播间。
    LiveFollowRoom(LiveFollowRoom),
    /// 直播间卡片。
    LiveRoomCard(LiveRoomCard),
    /// 相关视频推荐。
    RelatedVideo(RelatedVideo),
    /// 视频搜索结果。
    VideoSearchItem(VideoSearchItem),
    /// 直播搜索结果。
    LiveSearchItem(LiveSearchItem),
    /// 用户空间视频条目。
    UserSpaceVideo(UserSpaceVideo),
}

impl SourcePayload {
    /// 返回该数据的形态标签。
    #[must_use]
    pub fn shape(&self) -> SourceShape {
        match self {
            Self::PartitionVideo(_) => SourceShape::PartitionVideo,
            Self::RankItem(_) => SourceShape::RankItem,
            Self::RecommendCard(_) => SourceShape::RecommendCard,
            Self::SmallCoverCard(_) => SourceShape::SmallCoverCard,
            Self::LiveFollowRoom(_) => SourceShape::LiveFollowRoom,
            Self::LiveRoomCard(_) => SourceShape::LiveRoomCard,
            Self::RelatedVideo(_) => SourceShape::RelatedVideo,
            Self::VideoSearchItem(_) => SourceShape::VideoSearchItem,
            Self::LiveSearchItem(_) => SourceShape::LiveSearchItem,
            Self::UserSpaceVideo(_) => SourceShape::UserSpaceVideo,
        }
    }

    /// 按指定形态从 JSON 文本反序列化。
    pub fn from_json(shape: SourceShape, json: &str) -> serde_json::Result<Self> {
        Ok(match shape {
            SourceShape::PartitionVideo => Self::PartitionVideo(serde_json::from_str(json)?),
            SourceShape::RankItem => Self::RankItem(serde_json::from_str(json)?),
            SourceShape::RecommendCard => Self::RecommendCard(serde_json::from_str(json)?),
            SourceShape::SmallCoverCard => Self::SmallCoverCard(serde_json::from_str(json)?),
            SourceShape::LiveFollowRoom => Self::LiveFollowRoom(serde_json::from_str(json)?),
            SourceShape::LiveRoomCard => Self::LiveRoomCard(serde_json::from_str(json)?),
            SourceShape::RelatedVideo => Self::RelatedVideo(serde_json::from_str(json)?),
            SourceShape::VideoSearchItem => Self::VideoSearchItem(serde_json::from_str(json)?),
            SourceShape::LiveSearchItem => Self::LiveSearchItem(serde_json::from_str(json)?),
            SourceShape::UserSpaceVideo => Self::UserSpaceVideo(serde_json::from_str(json)?),
        })
    }
}

macro_rules! impl_from_raw {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for SourcePayload {
                fn from(raw: $variant) -> Self {
                    Self::$variant(raw)
                }
            }
        )+
    };
}

impl_from_raw!(
    PartitionVideo,
    RankItem,
    RecommendCard,
    SmallCoverCard,
    LiveFollowRoom,
    LiveRoomCard,
    RelatedVideo,
    VideoSearchItem,
    LiveSearchItem,
    UserSpaceVideo,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_shape_names_are_snake_case() {
        assert_eq!(SourceShape::RankItem.to_string(), "rank_item");
        assert_eq!(
            SourceShape::from_str("live_search_item").unwrap(),
            SourceShape::LiveSearchItem
        );
        assert_eq!(SourceShape::iter().count(), 10);
    }

    #[test]
    fn test_from_json_tags_payload_with_requested_shape() {
        let payload =
            SourcePayload::from_json(SourceShape::LiveRoomCard, r#"{"room_id": 42}"#).unwrap();
        assert_eq!(payload.shape(), SourceShape::LiveRoomCard);
    }

    #[test]
    fn test_from_json_rejects_malformed_text() {
        assert!(SourcePayload::from_json(SourceShape::RankItem, "{").is_err());
    }
}
