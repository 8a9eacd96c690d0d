//! 时长与数量的格式化。
//!
//! 适配器只通过 [`NumberToolkit`] 调用这些函数，调用方可以注入自己的实现。

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 格式化过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 时长为负数。
    #[error("时长不能为负数: {0}")]
    NegativeDuration(i64),
    /// 数量为负数。
    #[error("数量不能为负数: {0}")]
    NegativeCount(i64),
    /// 无法识别的时长文本。
    #[error("无法识别的时长文本: '{0}'")]
    InvalidDurationText(String),
}

/// 大数字的缩写风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStyle {
    /// 以 "万"、"亿" 为单位，例如 `1.5万`。
    #[default]
    Chinese,
    /// 以 "K"、"M"、"B" 为单位，例如 `15K`。
    Western,
}

/// 数字格式化工具。
pub trait NumberToolkit {
    /// 将秒数格式化为时长文本。
    fn duration_text(&self, seconds: i64) -> Result<String, FormatError>;

    /// 规范化一个已经格式化过的时长文本，例如 `"2:5"`。
    fn normalize_duration_text(&self, text: &str) -> Result<String, FormatError>;

    /// 将数量缩写为简短的文本。
    fn count_text(&self, count: i64) -> Result<String, FormatError> {
        if count < 0 {
            return Err(FormatError::NegativeCount(count));
        }
        let units: &[(i64, &str)] = match self.style {
            CountStyle::Chinese => &[(10_000, "万"), (100_000_000, "亿")],
            CountStyle::Western => &[(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")],
        };

        let Some(mut index) = units.iter().rposition(|&(base, _)| count >= base) else {
            return Ok(count.to_string());
        };
        let mut tenths = rounded_tenths(count, units[index].0);
        // 四舍五入后可能进位到下一个单位，例如 99_999_999 -> 1亿 而不是 10000万
        while let Some(&(next_base, _)) = units.get(index + 1) {
            if tenths < i128::from(next_base / units[index].0) * 10 {
                break;
            }
            index += 1;
            tenths = rounded_tenths(count, next_base);
        }
        Ok(format!("{}{}", format_tenths(tenths), units[index].1))
    }
}

/// 以 `base` 为单位、四舍五入到十分位后的值，乘以 10 以便用整数表示。
fn rounded_tenths(count: i64, base: i64) -> i128 {
    let base = i128::from(base);
    (i128::from(count) * 10 + base / 2) / base
}

/// 保留一位小数，并去掉多余的 `.0`。
fn format_tenths(tenths: i128) -> String {
    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}
