//! 检查主流程：加载 → 检查 → 输出
use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::checks::run_checks;
use crate::loader::load_text;
use crate::options::{CheckOptions, CheckStats, OutputFormat};
use crate::report::{write_json, write_json_error, write_text, write_text_error};

/// 检查单个文件并将结果写入 `out`
/// - 读取/解码失败在此处捕获，转为一行错误输出，返回 Ok
/// - 只有写 `out` 失败才返回 Err
pub fn check_and_write(opts: &CheckOptions, out: &mut dyn Write) -> Result<CheckStats> {
    let mut stats = CheckStats::default();

    let text = match load_text(&opts.path, opts.max_file_size) {
        Ok(text) => text,
        Err(e) => {
            // 已按约定输出到 out，日志只在 info 级别记录
            info!(path = ?opts.path, error = %e, "failed to load file");
            let description = e.to_string();
            match opts.format {
                OutputFormat::Text => write_text_error(out, &description)?,
                OutputFormat::Json => write_json_error(out, &opts.path, &description)?,
            }
            return Ok(stats);
        }
    };
    stats.loaded = true;
    stats.bytes_read = text.len();

    let report = run_checks(&text);
    // 内容到此不再使用
    drop(text);
    match opts.format {
        OutputFormat::Text => write_text(out, &report)?,
        OutputFormat::Json => write_json(out, &opts.path, &report)?,
    }
    stats.report = Some(report);
    Ok(stats)
}
