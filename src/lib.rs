#![warn(missing_docs)]

//! # Media Item RS
//!
//! 将来自多个上游接口、结构各异的"媒体内容"数据统一转换为同一种展示用条目 [`MediaItem`]。
//!
//! ## 主要功能
//!
//! - **统一模型**: 分区列表、排行榜、推荐卡片、直播间、相关推荐、搜索结果、用户空间投稿
//!   等十种数据形态都会被转换为字段固定的 [`MediaItem`]。
//! - **类别判定**: 根据各形态自己的标记区分普通视频、PGC 内容与直播。
//! - **可替换的协作者**: 时长/数量格式化与发布者构造都通过 trait 注入，可以自由替换。
//! - **批量转换**: 使用 `rayon` 并行转换一批互不相关的数据，结果保持输入顺序。
//!
//! ## 转换一条数据
//!
//! ```rust
//! use media_item_rs::{MediaCategory, MediaItemHelper, SourceShape};
//!
//! let helper = MediaItemHelper::new();
//! let json = r#"{
//!     "title": "Demo",
//!     "param": "av123",
//!     "cover": "http://x/y.jpg",
//!     "duration": 125,
//!     "play": 15000
//! }"#;
//!
//! match helper.normalize_json(SourceShape::PartitionVideo, json) {
//!     Ok(item) => {
//!         assert_eq!(item.category, MediaCategory::Video);
//!         assert_eq!(item.duration_text, "02:05");
//!         assert_eq!(item.play_count_text, "1.5万");
//!         assert_eq!(item.cover.display(), "http://x/y.jpg@400w_250h_1c_100q.jpg");
//!     }
//!     Err(e) => eprintln!("转换失败: {}", e),
//! }
//! ```
pub mod config;
pub mod error;
pub mod model;
pub mod sources;
pub mod toolkit;

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, instrument};

pub use crate::{
    config::NormalizerConfig,
    error::{MediaItemError, NormalizationWarning, Result},
    model::{CoverUrl, MediaCategory, MediaItem, Publisher, SourcePayload, SourceShape},
    sources::IntoMediaItem,
};

use crate::toolkit::{
    AdapterContext,
    number::{DefaultNumberToolkit, NumberToolkit},
    publisher::{DefaultPublisherBuilder, PublisherBuilder},
};

// ==========================================================
//  顶层 API
// ==========================================================

/// 顶层转换助手，持有格式化工具、发布者构造器和配置，为用户提供统一的转换接口。
///
/// 这是与本库交互的主要入口点。
pub struct MediaItemHelper {
    numbers: Box<dyn NumberToolkit + Send + Sync>,
    publishers: Box<dyn PublisherBuilder + Send + Sync>,
    config: NormalizerConfig,
}

impl Default for MediaItemHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaItemHelper {
    /// 使用默认配置和默认协作者创建实例。
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// 使用指定配置和默认协作者创建实例。数量的缩写风格取自配置。
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self::with_collaborators(
            Box::new(DefaultNumberToolkit::new(config.count_style)),
            Box::new(DefaultPublisherBuilder),
            config,
        )
    }

    /// 使用配置目录中保存的配置创建实例。
    ///
    /// 配置文件不存在时会写入一份默认配置。
    pub fn from_config_file() -> Result<Self> {
        Ok(Self::with_config(config::load_normalizer_config()?))
    }

    /// 使用指定路径下的配置文件创建实例。
    ///
    /// 文件不存在时会在该路径写入一份默认配置。
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Ok(Self::with_config(config::load_normalizer_config_from(path)?))
    }

    /// 使用调用方提供的协作者创建实例。
    pub fn with_collaborators(
        numbers: Box<dyn NumberToolkit + Send + Sync>,
        publishers: Box<dyn PublisherBuilder + Send + Sync>,
        config: NormalizerConfig,
    ) -> Self {
        Self {
            numbers,
            publishers,
            config,
        }
    }

    /// 当前生效的配置。
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// 构造一次转换使用的上下文。
    pub fn context(&self) -> AdapterContext<'_> {
        AdapterContext::new(&*self.numbers, &*self.publishers, &self.config)
    }

    /// 转换一条已知类型的数据。
    ///
    /// 适配器在编译期根据 `S` 的类型选择。
    pub fn normalize<S: IntoMediaItem>(&self, raw: S) -> Result<MediaItem> {
        let item = raw.into_media_item(&self.context())?;
        debug!(
            "[{}] 已转换条目 '{}'，类别: {}",
            S::SHAPE,
            item.identifier,
            item.category
        );
        Ok(item)
    }

    /// 转换一条类型在运行时才确定的数据。
    pub fn normalize_payload(&self, payload: SourcePayload) -> Result<MediaItem> {
        match payload {
            SourcePayload::PartitionVideo(raw) => self.normalize(raw),
            SourcePayload::RankItem(raw) => self.normalize(raw),
            SourcePayload::RecommendCard(raw) => self.normalize(raw),
            SourcePayload::SmallCoverCard(raw) => self.normalize(raw),
            SourcePayload::LiveFollowRoom(raw) => self.normalize(raw),
            SourcePayload::LiveRoomCard(raw) => self.normalize(raw),
            SourcePayload::RelatedVideo(raw) => self.normalize(raw),
            SourcePayload::VideoSearchItem(raw) => self.normalize(raw),
            SourcePayload::LiveSearchItem(raw) => self.normalize(raw),
            SourcePayload::UserSpaceVideo(raw) => self.normalize(raw),
        }
    }

    /// 按指定形态解析 JSON 文本，然后转换。
    ///
    /// # 参数
    /// * `shape` - JSON 所属的数据形态。
    /// * `json` - 单个条目的 JSON 文本。
    #[instrument(skip(self, json))]
    pub fn normalize_json(&self, shape: SourceShape, json: &str) -> Result<MediaItem> {
        let payload = SourcePayload::from_json(shape, json)?;
        self.normalize_payload(payload)
    }

    /// 并行转换一批数据。
    ///
    /// 每条输入对应一个结果，顺序与输入一致；单条失败不会影响其他条目。
    #[instrument(skip_all, fields(count = payloads.len()))]
    pub fn normalize_batch(&self, payloads: Vec<SourcePayload>) -> Vec<Result<MediaItem>> {
        let results: Vec<Result<MediaItem>> = payloads
            .into_par_iter()
            .map(|payload| self.normalize_payload(payload))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(
            "批量转换完成，共 {} 条，失败 {} 条。",
            results.len(),
            failed
        );
        results
    }
}
