//! 相关视频推荐的适配器。

use crate::{
    error::Result,
    model::{item::MediaItem, source::SourceShape},
    sources::{IntoMediaItem, classify_goto, require_id, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::RelatedVideo;

impl IntoMediaItem for RelatedVideo {
    const SHAPE: SourceShape = SourceShape::RelatedVideo;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_id(Self::SHAPE, "aid", self.aid)?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let category = classify_goto(Self::SHAPE, "goto", self.goto.as_deref(), &mut warnings);

        let author = self.author.as_ref();
        let publisher = ctx.publisher(
            author.and_then(|a| a.name.as_deref()),
            author.and_then(|a| a.face.as_deref()),
            author.and_then(|a| a.mid),
        );

        let stat = self.stat.clone().unwrap_or_default();
        let play_count_text = ctx.count(stat.view)?;
        let danmaku_count_text = ctx.count(stat.danmaku)?;
        let like_count_text = ctx.count(stat.like)?;
        let reply_count_text = ctx.count(stat.reply)?;
        let duration_text = ctx.optional_duration(self.duration)?;
        let additional_text = self.rating.map(|r| r.to_string()).unwrap_or_default();
        let cover = self.pic.clone().unwrap_or_default();

        Ok(MediaItem {
            category,
            duration_text,
            play_count_text,
            reply_count_text,
            danmaku_count_text,
            like_count_text,
            additional_text,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
