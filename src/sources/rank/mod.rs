//! 排行榜条目的适配器。
//!
//! 与分区列表基本一致，额外把排行榜得分 (`pts`) 放进 `additional_text`。

use crate::{
    error::Result,
    model::{item::MediaItem, source::SourceShape},
    sources::{IntoMediaItem, parse_numeric, require_text, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::RankItem;

impl IntoMediaItem for RankItem {
    const SHAPE: SourceShape = SourceShape::RankItem;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_text(Self::SHAPE, "param", self.param.as_deref())?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let user_id: u64 = parse_numeric(Self::SHAPE, "mid", self.mid.as_deref())?;
        let publisher = ctx.publisher(self.name.as_deref(), self.face.as_deref(), Some(user_id));
        let cover = self.cover.clone().unwrap_or_default();

        let duration_text = ctx.optional_duration(self.duration)?;
        let play_count_text = ctx.count(self.play)?;
        let reply_count_text = ctx.count(self.reply)?;
        let danmaku_count_text = ctx.count(self.danmaku)?;
        let like_count_text = ctx.count(self.like)?;
        let partition_name = self.rname.clone().unwrap_or_default();
        let partition_id = self.rid.unwrap_or_default();
        let additional_text = self.pts.map(|pts| pts.to_string()).unwrap_or_default();

        Ok(MediaItem {
            duration_text,
            play_count_text,
            reply_count_text,
            danmaku_count_text,
            like_count_text,
            partition_name,
            partition_id,
            additional_text,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
