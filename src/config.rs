//! 负责处理转换行为的持久化配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{error::Result, toolkit::number::CountStyle};

const CONFIG_FILE_NAME: &str = "normalizer_config.json";

/// 转换行为的配置项。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 数量的缩写风格。
    pub count_style: CountStyle,
    /// 为 `true` 时，缺少标题会直接报错，而不是以空字符串代替。
    pub strict_title: bool,
}

impl NormalizerConfig {
    /// 从 JSON 文本解析配置，缺失的字段取默认值。
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "normalizer_config.json"。
pub(crate) fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("media-item-rs");
        fs::create_dir_all(&config_dir)?;
        config_dir.push(filename);
        Ok(config_dir)
    } else {
        let err = io::Error::new(io::ErrorKind::NotFound, "无法找到用户配置目录");
        Err(err.into())
    }
}

/// 从配置目录加载配置。文件不存在时创建并保存一份默认配置。
pub fn load_normalizer_config() -> Result<NormalizerConfig> {
    load_normalizer_config_from(&get_config_file_path(CONFIG_FILE_NAME)?)
}

/// 从指定路径加载配置。文件不存在时在该路径创建并保存一份默认配置。
pub fn load_normalizer_config_from(config_path: &Path) -> Result<NormalizerConfig> {
    match fs::read_to_string(config_path) {
        Ok(content) => {
            let config = NormalizerConfig::from_json_str(&content)?;
            info!("已从 {:?} 加载转换配置。", config_path);
            Ok(config)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("转换配置文件不存在，将创建并保存默认配置。");
            let config = NormalizerConfig::default();
            save_normalizer_config_to(config_path, &config)?;
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

/// 将配置序列化为 JSON 并保存到配置目录。
pub fn save_normalizer_config(config: &NormalizerConfig) -> Result<()> {
    save_normalizer_config_to(&get_config_file_path(CONFIG_FILE_NAME)?, config)
}

/// 将配置序列化为格式化的 JSON 并保存到指定路径，必要时创建上级目录。
pub fn save_normalizer_config_to(config_path: &Path, config: &NormalizerConfig) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    info!("转换配置已保存到 {:?}。", config_path);
    Ok(())
}
