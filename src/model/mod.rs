//! 定义了本库的核心数据模型：规范化后的媒体条目、发布者以及原始数据的来源信息。

pub mod item;
pub mod publisher;
pub mod source;

pub use item::{COVER_SIZE_SUFFIX, CoverUrl, MediaCategory, MediaItem, derive_display_cover};
pub use publisher::Publisher;
pub use source::{SourcePayload, SourceShape};
