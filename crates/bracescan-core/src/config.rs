//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::options::{CheckOptions, OutputFormat};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置文件结构；所有字段可选，未知字段报错
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// 在默认选项之上叠加配置文件中出现的字段
    pub fn into_options(self) -> CheckOptions {
        let defaults = CheckOptions::default();
        CheckOptions {
            path: self.path.unwrap_or(defaults.path),
            max_file_size: self.max_file_size.or(defaults.max_file_size),
            format: self.format.unwrap_or(defaults.format),
        }
    }
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&txt).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}
