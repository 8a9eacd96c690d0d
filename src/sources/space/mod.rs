//! 用户空间投稿的适配器。

use crate::{
    error::Result,
    model::{
        item::{MediaCategory, MediaItem},
        source::SourceShape,
    },
    sources::{IntoMediaItem, require_text, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::UserSpaceVideo;

impl IntoMediaItem for UserSpaceVideo {
    const SHAPE: SourceShape = SourceShape::UserSpaceVideo;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "param", self.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let category = if self.is_pgc {
            MediaCategory::Pgc
        } else {
            MediaCategory::Video
        };
        let publisher = ctx.publisher(self.author.as_deref(), None, None);
        let duration_text = ctx.optional_duration(self.duration)?;
        let play_count_text = ctx.count(self.play)?;
        let danmaku_count_text = ctx.count(self.danmaku)?;
        let partition_name = self.partition_name.clone().unwrap_or_default();
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category,
            duration_text,
            play_count_text,
            danmaku_count_text,
            partition_name,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
