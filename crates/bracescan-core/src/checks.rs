//! 三项独立检查：NUL 字符、花括号计数、非 ASCII 扫描
use tracing::debug;

use crate::report::IntegrityReport;

/// 是否包含 NUL 字符（U+0000）；不关心位置与数量
pub(crate) fn has_null(text: &str) -> bool {
    text.contains('\0')
}

/// 分别统计 `{` 与 `}` 的出现次数
/// 纯字符计数：注释/字符串内的括号同样计入，也不检查先后顺序
pub(crate) fn count_braces(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}

/// 逐字符扫描码点 > 127 的字符
/// 西班牙语文本中属于正常情况，不产生任何输出；仅返回数量并在 debug 级别记录首个位置
pub(crate) fn scan_non_ascii(text: &str) -> usize {
    let mut count = 0usize;
    let mut first: Option<usize> = None;
    for (i, c) in text.chars().enumerate() {
        if (c as u32) > 127 {
            count += 1;
            first.get_or_insert(i);
        }
    }
    if let Some(first) = first {
        debug!(count, first_char_index = first, "non-ascii characters present");
    }
    count
}

/// 对已加载文本运行全部检查
pub fn run_checks(text: &str) -> IntegrityReport {
    let (open_braces, close_braces) = count_braces(text);
    IntegrityReport {
        has_null: has_null(text),
        open_braces,
        close_braces,
        non_ascii: scan_non_ascii(text),
    }
}
