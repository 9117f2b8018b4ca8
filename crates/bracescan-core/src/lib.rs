//! 文本完整性检查库
//!
//! 对单个文件做一次性检查：
//! - 是否含 NUL 字符；
//! - `{` 与 `}` 数量是否一致（朴素计数，不做语法解析）；
//! - 非 ASCII 字符扫描（西班牙语文本属正常情况，不影响输出）。
//! 读取/解码失败统一输出一行 `Error reading file: ...`，不视为进程错误。

mod checks;
mod config;
mod loader;
mod options;
mod report;
mod scan;

pub use config::{load_config, ConfigError, FileConfig};
pub use options::{CheckOptions, CheckStats, OutputFormat};
pub use report::IntegrityReport;
pub use scan::check_and_write;
