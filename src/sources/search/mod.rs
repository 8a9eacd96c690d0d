//! 搜索结果的适配器。视频结果固定为 `Video`，直播结果固定为 `Live`。

use crate::{
    error::Result,
    model::{
        item::{MediaCategory, MediaItem},
        source::SourceShape,
    },
    sources::{IntoMediaItem, require_id, require_text, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::{LiveSearchItem, VideoSearchItem};

impl IntoMediaItem for VideoSearchItem {
    const SHAPE: SourceShape = SourceShape::VideoSearchItem;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "param", self.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let publisher = ctx.publisher(self.author.as_deref(), self.avatar.as_deref(), self.mid);
        let duration_text = ctx.duration_from_text(self.duration.as_deref())?;
        let play_count_text = ctx.count(self.play)?;
        let danmaku_count_text = ctx.count(self.danmaku)?;
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category: MediaCategory::Video,
            duration_text,
            play_count_text,
            danmaku_count_text,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}

impl IntoMediaItem for LiveSearchItem {
    const SHAPE: SourceShape = SourceShape::LiveSearchItem;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_id(Self::SHAPE, "roomid", self.room_id)?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let publisher = ctx.publisher(self.name.as_deref(), None, self.user_id);
        let viewer_count_text = ctx.count(self.viewer_count)?;
        let partition_name = self.area_name.clone().unwrap_or_default();
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category: MediaCategory::Live,
            viewer_count_text,
            partition_name,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
