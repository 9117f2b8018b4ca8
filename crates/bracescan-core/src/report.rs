//! 检查结果与输出渲染
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// 单个文件的检查结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub has_null: bool,
    pub open_braces: usize,
    pub close_braces: usize,
    /// 非 ASCII 字符数；只用于日志，不进入任何输出
    pub non_ascii: usize,
}

impl IntegrityReport {
    pub fn is_balanced(&self) -> bool {
        self.open_braces == self.close_braces
    }
}

/// JSON 输出项（成功）
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    null_bytes: bool,
    open_braces: usize,
    close_braces: usize,
    balanced: bool,
}

/// JSON 输出项（读取失败）
#[derive(Debug, Serialize)]
struct JsonError<'a> {
    path: &'a str,
    error: &'a str,
}

/// 文本格式：依次输出 NUL 警告、计数行、不匹配警告、结束行
pub(crate) fn write_text(out: &mut dyn Write, report: &IntegrityReport) -> Result<()> {
    if report.has_null {
        writeln!(out, "Found NULL bytes in file!")?;
    }
    writeln!(out, "Braces: {{: {}, }}: {}", report.open_braces, report.close_braces)?;
    if !report.is_balanced() {
        writeln!(out, "Mismatched braces!")?;
    }
    writeln!(out, "Scan complete.")?;
    Ok(())
}

pub(crate) fn write_text_error(out: &mut dyn Write, description: &str) -> Result<()> {
    writeln!(out, "Error reading file: {description}")?;
    Ok(())
}

/// JSON 格式；路径按 `to_string_lossy` 转换，非 UTF-8 路径中的非法字节会被替换为 U+FFFD
pub(crate) fn write_json(out: &mut dyn Write, path: &Path, report: &IntegrityReport) -> Result<()> {
    let path = path.to_string_lossy();
    let item = JsonReport {
        path: &path,
        null_bytes: report.has_null,
        open_braces: report.open_braces,
        close_braces: report.close_braces,
        balanced: report.is_balanced(),
    };
    serde_json::to_writer(&mut *out, &item)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_json_error(out: &mut dyn Write, path: &Path, description: &str) -> Result<()> {
    let path = path.to_string_lossy();
    serde_json::to_writer(&mut *out, &JsonError { path: &path, error: description })?;
    writeln!(out)?;
    Ok(())
}
