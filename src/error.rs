//! 定义了整个 `media-item` 库的错误类型 `MediaItemError`，以及不会中断转换的警告类型。

use std::{io, num::ParseIntError};

use serde::Serialize;
use thiserror::Error;

use crate::{model::source::SourceShape, toolkit::number::FormatError};

/// `media-item` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum MediaItemError {
    /// 源数据缺少必需字段（标识符，或严格模式下的标题）。
    #[error("{shape} 缺少必需字段 `{field}`")]
    MissingRequiredField {
        /// 出错的源数据形态。
        shape: SourceShape,
        /// 缺失的字段名。
        field: &'static str,
    },

    /// 以字符串形式给出的数字字段无法解析。
    #[error("{shape} 的字段 `{field}` 不是有效的数字: '{value}'")]
    InvalidNumericField {
        /// 出错的源数据形态。
        shape: SourceShape,
        /// 字段名。
        field: &'static str,
        /// 原始值。
        value: String,
        /// 底层的解析错误。
        #[source]
        source: ParseIntError,
    },

    /// 时长或数量格式化失败，通常意味着上游数据本身有问题。
    #[error("格式化失败: {0}")]
    Format(#[from] FormatError),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),
}

/// `MediaItemError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, MediaItemError>;

/// 转换过程中发现、但不影响产出结果的问题。
///
/// 这些警告会同时通过 `tracing::warn!` 输出，并附加在 `MediaItem::warnings` 上，
/// 方便调用方决定是否需要上报。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationWarning {
    /// 分支字段的值不在已知集合中，已按默认分支处理。
    UnrecognizedDiscriminant {
        /// 源数据形态。
        shape: SourceShape,
        /// 分支字段名。
        field: &'static str,
        /// 实际收到的值。
        value: String,
    },
    /// 源数据没有标题，已使用空字符串代替。
    MissingTitle {
        /// 源数据形态。
        shape: SourceShape,
    },
}
