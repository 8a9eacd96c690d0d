//! 直播间的适配器。两种形态都固定为 `Live` 类别。

use crate::{
    error::Result,
    model::{
        item::{MediaCategory, MediaItem},
        source::SourceShape,
    },
    sources::{IntoMediaItem, parse_numeric, require_id, resolve_title},
    toolkit::AdapterContext,
};

pub mod models;

use models::{LiveFollowRoom, LiveRoomCard};

impl IntoMediaItem for LiveFollowRoom {
    const SHAPE: SourceShape = SourceShape::LiveFollowRoom;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_id(Self::SHAPE, "roomid", self.room_id)?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let publisher = ctx.publisher(
            self.user_name.as_deref(),
            self.user_avatar.as_deref(),
            self.user_id,
        );
        let viewer_count_text = ctx.count(self.viewer_count)?;
        let partition_id =
            parse_numeric(Self::SHAPE, "area_v2_id", self.display_area_id.as_deref())?;
        let partition_name = self.display_area_name.clone().unwrap_or_default();
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category: MediaCategory::Live,
            viewer_count_text,
            partition_name,
            partition_id,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}

impl IntoMediaItem for LiveRoomCard {
    const SHAPE: SourceShape = SourceShape::LiveRoomCard;

    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem> {
        let mut warnings = Vec::new();
        let identifier = require_id(Self::SHAPE, "room_id", self.room_id)?;
        let title = resolve_title(ctx, Self::SHAPE, self.title.as_deref(), &mut warnings)?;
        let streamer = self
            .cover_left_content
            .as_ref()
            .and_then(|c| c.text.as_deref());
        let publisher = ctx.publisher(streamer, None, None);
        let viewer_count_text = self
            .cover_right_content
            .as_ref()
            .and_then(|c| c.text.clone())
            .unwrap_or_default();
        let partition_id = parse_numeric(Self::SHAPE, "area_id", self.area_id.as_deref())?;
        let partition_name = self.area_name.clone().unwrap_or_default();
        let cover = self.cover.clone().unwrap_or_default();

        Ok(MediaItem {
            category: MediaCategory::Live,
            viewer_count_text,
            partition_name,
            partition_id,
            warnings,
            ..MediaItem::base(identifier, title, &cover, publisher, self.into())
        })
    }
}
