//! 文件加载（整读 + UTF-8 解码）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 读取/解码失败。
/// 各变体的描述不同，但对外输出统一为一行 `Error reading file: <描述>`。
#[derive(Debug, Error)]
pub enum LoadError {
    /// 打开或读取失败（不存在、无权限等均归于此）
    #[error("{source}: '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 内容不是合法 UTF-8
    #[error("invalid utf-8 sequence at byte {valid_up_to}: '{}'", path.display())]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
    /// 超过 max_file_size
    #[error("file exceeds maximum size of {limit} bytes: '{}'", path.display())]
    TooLarge { path: PathBuf, limit: u64 },
}

/// 按 UTF-8 整读单个文件
/// - 设置了 `max_file_size` 时最多读取 limit+1 字节，用于判定超限
/// - 文件句柄仅在本函数内存活，任一返回路径均会释放
pub fn load_text(path: &Path, max_file_size: Option<u64>) -> Result<String, LoadError> {
    let io_err = |source| LoadError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_err)?;
    let mut buf = Vec::new();
    match max_file_size {
        Some(limit) => {
            let mut reader = BufReader::new(file).take(limit.saturating_add(1));
            reader.read_to_end(&mut buf).map_err(io_err)?;
            if buf.len() as u64 > limit {
                return Err(LoadError::TooLarge { path: path.to_path_buf(), limit });
            }
        }
        None => {
            let mut reader = BufReader::new(file);
            reader.read_to_end(&mut buf).map_err(io_err)?;
        }
    }

    String::from_utf8(buf).map_err(|e| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
