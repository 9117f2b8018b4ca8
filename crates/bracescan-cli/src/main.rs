use anyhow::{Context, Result};
use bracescan_core::{check_and_write, load_config, CheckOptions, FileConfig, OutputFormat};
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "bracescan", version, about = "检查文件中的 NUL 字符与花括号数量")]
struct Cli {
    /// 待检查文件（默认 ./app.js）
    path: Option<PathBuf>,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 最大文件大小（单位字节）；超过则按读取失败处理
    #[arg(long)]
    max_file_size: Option<u64>,

    /// 输出格式：text 或 json（默认 text）
    #[arg(long, value_parser = ["text", "json"])]
    format: Option<String>,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let opts = resolve_options(cli)?;
    info!(path = ?opts.path, format = ?opts.format, "starting check");

    // 标准输出只承载检查结果；日志走 stderr
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = check_and_write(&opts, &mut out).context("write report failed")?;
    out.flush().context("flush stdout")?;

    match &stats.report {
        Some(report) => info!(
            bytes_read = stats.bytes_read,
            open = report.open_braces,
            close = report.close_braces,
            has_null = report.has_null,
            non_ascii = report.non_ascii,
            "check finished"
        ),
        None => info!(loaded = stats.loaded, "check finished"),
    }
    Ok(())
}

/// 合并选项：命令行 > 配置文件 > 默认值
fn resolve_options(cli: Cli) -> Result<CheckOptions> {
    let base = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => FileConfig::default(),
    };
    let mut opts = base.into_options();

    if let Some(path) = cli.path {
        opts.path = path;
    }
    if cli.max_file_size.is_some() {
        opts.max_file_size = cli.max_file_size;
    }
    if let Some(format) = cli.format.as_deref() {
        opts.format = match format {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }
    Ok(opts)
}

fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 默认仅输出 warn 及以上；可用 RUST_LOG=debug 查看非 ASCII 统计
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
