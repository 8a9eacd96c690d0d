//! 首页推荐卡片与小封面通用卡片的适配器。
//!
//! 推荐卡片需要根据 `card_goto` 区分视频与 PGC 内容，两条分支取值的来源不同：
//!
//! | 字段 | 视频 (`av`) | PGC |
//! |---|---|---|
//! | 发布者 | `args` 中的昵称与 ID | `desc_button` 文本，仅昵称 |
//! | 时长 | 优先 `player_args.duration`，否则规范化 `cover_right_text` | 固定为 `--` |
//! | 弹幕数 | 次要状态文本 | 空 |
//! | 点赞数 | 空 | 次要状态文本 |

use crate::{
    error::{MediaItemError, Result},
    model::{
        item::{DURATION_PLACEHOLDER, MediaCategory, MediaItem},
        publisher::Publisher,
        source::SourceShape,
    },
    sources::{IntoMediaItem, classify_goto, require_text, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::{RecommendCard, SmallCoverCard};

/// 推荐卡片中随分支变化的字段。
struct BranchFields {
    publisher: Publisher,
    duration_text: String,
    danmaku_count_text: String,
    like_count_text: String,
    partition_name: String,
    partition_id: u32,
}

impl RecommendCard {
    fn video_fields(&self, ctx: &AdapterContext<'_>, sub_status: String) -> Result<BranchFields> {
        let args = self.card_args.as_ref();
        let publisher = ctx.publisher(
            args.and_then(|a| a.publisher_name.as_deref()),
            None,
            args.and_then(|a| a.publisher_id),
        );
        let duration_text = match self.player_args.as_ref().and_then(|p| p.duration) {
            Some(seconds) => ctx.duration_from_seconds(seconds)?,
            None => ctx.duration_from_text(self.duration_text.as_deref())?,
        };

        Ok(BranchFields {
            publisher,
            duration_text,
            danmaku_count_text: sub_status,
            like_count_text: String::new(),
            partition_name: args
                .and_then(|a| a.partition_name.clone())
                .unwrap_or_default(),
            partition_id: args.and_then(|a| a.partition_id).unwrap_or_default(),
        })
    }

    fn pgc_fields(&self, ctx: &AdapterContext<'_>, sub_status: String) -> BranchFields {
        let name = self.description.as_ref().and_then(|d| d.text.as_deref());
        BranchFields {
            publisher: ctx.publisher(name, None, None),
            duration_text: DURATION_PLACEHOLDER.to_string(),
            danmaku_count_text: String::new(),
            like_count_text: sub_status,
            partition_name: String::new(),
            partition_id: 0,
        }
    }
}

impl IntoMediaItem for RecommendCard {
    const SHAPE: SourceShape = SourceShape::RecommendCard;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "param", self.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let category = classify_goto(
            Self::SHAPE,
            "card_goto",
            self.card_goto.as_deref(),
            &mut warnings,
        );

        let sub_status = self.sub_status_text.clone().unwrap_or_default();
        let branch = match category {
            MediaCategory::Video => self.video_fields(ctx, sub_status)?,
            _ => self.pgc_fields(ctx, sub_status),
        };
        let play_count_text = self.play_count_text.clone().unwrap_or_default();
        let additional_text = self.recommend_reason.clone().unwrap_or_default();
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category,
            duration_text: branch.duration_text,
            play_count_text,
            danmaku_count_text: branch.danmaku_count_text,
            like_count_text: branch.like_count_text,
            partition_name: branch.partition_name,
            partition_id: branch.partition_id,
            additional_text,
            warnings,
            ..MediaItem::base(identifier, title, &cover, branch.publisher, self.into())
        })
    }
}

impl IntoMediaItem for SmallCoverCard {
    const SHAPE: SourceShape = SourceShape::SmallCoverCard;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let missing = |field| MediaItemError::MissingRequiredField {
            shape: Self::SHAPE,
            field,
        };
        let v5 = self
            .small_cover_v5
            .as_ref()
            .ok_or_else(|| missing("small_cover_v5"))?;
        let base = v5.base.as_ref().ok_or_else(|| missing("small_cover_v5.base"))?;

        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "base.param", base.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, base.title.as_deref(), &mut warnings)?;
        let publisher = ctx.publisher(v5.right_desc_1.as_deref(), None, None);
        let duration_text = ctx.duration_from_text(v5.cover_right_text_1.as_deref())?;
        let play_count_text = v5.right_desc_2.clone().unwrap_or_default();
        let additional_text = v5
            .rcmd_reason_style
            .as_ref()
            .and_then(|style| style.text.clone())
            .unwrap_or_default();
        let cover = base.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            duration_text,
            play_count_text,
            additional_text,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
