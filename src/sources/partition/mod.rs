//! 分区视频列表的适配器。字段基本一一对应。

use crate::{
    error::Result,
    model::{item::MediaItem, source::SourceShape},
    sources::{IntoMediaItem, require_text, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::PartitionVideo;

impl IntoMediaItem for PartitionVideo {
    const SHAPE: SourceShape = SourceShape::PartitionVideo;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "param", self.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let publisher = ctx.publisher(
            self.publisher.as_deref(),
            self.publisher_avatar.as_deref(),
            self.publisher_id,
        );
        let cover = self.cover.clone().unwrap_or_default();

        let duration_text = ctx.optional_duration(self.duration)?;
        let play_count_text = ctx.count(self.play_count)?;
        let reply_count_text = ctx.count(self.reply_count)?;
        let danmaku_count_text = ctx.count(self.danmaku_count)?;
        let like_count_text = ctx.count(self.like_count)?;
        let partition_name = self.partition_name.clone().unwrap_or_default();
        let partition_id = self.partition_id.unwrap_or_default();

        Ok(MediaItem {
            duration_text,
            play_count_text,
            reply_count_text,
            danmaku_count_text,
            like_count_text,
            partition_name,
            partition_id,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
