//! 检查选项与统计信息（模块）
use serde::Deserialize;
use std::path::PathBuf;

use crate::report::IntegrityReport;

/// 默认检查的文件（相对当前工作目录）
pub const DEFAULT_PATH: &str = "app.js";

/// 输出格式
/// - Text：逐行输出人类可读结果（默认，与历史输出逐字一致）。
/// - Json：输出单个 JSON 对象，便于脚本消费。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 检查选项
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// 待检查文件路径；默认 ./app.js
    pub path: PathBuf,
    /// 最大文件大小（字节）；超过则报告读取失败
    pub max_file_size: Option<u64>,
    /// 输出格式
    pub format: OutputFormat,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            max_file_size: None,
            format: OutputFormat::Text,
        }
    }
}

/// 检查统计信息（便于 CLI 打印日志）
#[derive(Debug, Default, Clone)]
pub struct CheckStats {
    pub bytes_read: usize,
    pub loaded: bool,
    pub report: Option<IntegrityReport>,
}
