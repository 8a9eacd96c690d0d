//! 来源适配器模块
//!
//! 每个子模块对应一类上游接口：`models.rs` 定义用于反序列化的原始数据结构，
//! `mod.rs` 实现从原始数据到 [`MediaItem`] 的转换策略。

use std::{num::ParseIntError, str::FromStr};

use tracing::warn;

use crate::{
    error::{MediaItemError, NormalizationWarning, Result},
    model::{
        item::{MediaCategory, MediaItem},
        source::{SourcePayload, SourceShape},
    },
    toolkit::AdapterContext,
};

pub mod live;
pub mod partition;
pub mod rank;
pub mod recommend;
pub mod relate;
pub mod search;
pub mod space;

/// 代表视频内容的分支标记。
pub const VIDEO_GOTO: &str = "av";

/// 已知的 PGC 分支标记。
pub const PGC_GOTO_MARKERS: &[&str] = &["bangumi", "pgc", "special"];

/// 定义了所有上游数据形态需要实现的转换接口。
///
/// 每种形态各自实现一次，调用方根据手上数据的类型静态地选择适配器。
pub trait IntoMediaItem: Into<SourcePayload> {
    /// 该实现对应的数据形态。
    const SHAPE: SourceShape;

    ///
    /// 将原始数据转换为一个完整的 `MediaItem`。
    ///
    /// # 参数
    /// * `ctx` - 本次转换使用的格式化工具、发布者构造器和配置。
    ///
    /// # 返回
    /// 成功时返回新构造的条目，原始数据被原样保存在 `MediaItem::source` 中。
    ///
    fn into_media_item(self, ctx: &AdapterContext<'_>) -> Result<MediaItem>;
}

/// 检查字符串类型的必需字段，空白字符串视为缺失。
pub(crate) fn require_text(
    shape: SourceShape,
    field: &'static str,
    value: Option<&str>,
) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(MediaItemError::MissingRequiredField { shape, field }),
    }
}

/// 检查数字类型的必需 ID，并转成字符串形式的标识符。
pub(crate) fn require_id(
    shape: SourceShape,
    field: &'static str,
    value: Option<u64>,
) -> Result<String> {
    value
        .map(|id| id.to_string())
        .ok_or(MediaItemError::MissingRequiredField { shape, field })
}

/// 处理标题：宽松模式下缺失的标题以空字符串代替并记录警告，严格模式下直接报错。
pub(crate) fn resolve_title(
    ctx: &AdapterContext<'_>,
    shape: SourceShape,
    title: Option<&str>,
    warnings: &mut Vec<NormalizationWarning>,
) -> Result<String> {
    match title {
        Some(title) => Ok(title.to_string()),
        None if ctx.config().strict_title => Err(MediaItemError::MissingRequiredField {
            shape,
            field: "title",
        }),
        None => {
            warn!("[{}] 源数据缺少标题，已使用空字符串代替。", shape);
            warnings.push(NormalizationWarning::MissingTitle { shape });
            Ok(String::new())
        }
    }
}

/// 解析以字符串形式给出的数字字段。缺失或为空时返回默认值 (`0`)。
pub(crate) fn parse_numeric<T>(
    shape: SourceShape,
    field: &'static str,
    value: Option<&str>,
) -> Result<T>
where
    T: FromStr<Err = ParseIntError> + Default,
{
    let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(T::default());
    };
    text.parse::<T>()
        .map_err(|source| MediaItemError::InvalidNumericField {
            shape,
            field,
            value: text.to_string(),
            source,
        })
}

/// 根据 `goto` 一类的分支字段判断内容类别。
///
/// 与 [`VIDEO_GOTO`] 相等（不区分大小写）时为 `Video`，否则为 `Pgc`。
/// 值既不是视频标记也不在 [`PGC_GOTO_MARKERS`] 中时，仍按 `Pgc` 处理，但会记录一条警告。
pub(crate) fn classify_goto(
    shape: SourceShape,
    field: &'static str,
    value: Option<&str>,
    warnings: &mut Vec<NormalizationWarning>,
) -> MediaCategory {
    let value = value.unwrap_or_default().trim();
    if value.eq_ignore_ascii_case(VIDEO_GOTO) {
        return MediaCategory::Video;
    }

    if !PGC_GOTO_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
    {
        warn!(
            "[{}] 未知的 {} 值 '{}'，按 PGC 内容处理。",
            shape, field, value
        );
        warnings.push(NormalizationWarning::UnrecognizedDiscriminant {
            shape,
            field,
            value: value.to_string(),
        });
    }
    MediaCategory::Pgc
}
