mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use java_test_rename::scanner::test_suffix::{DEFAULT_EXTENSION, DEFAULT_MARKER, DEFAULT_SUFFIX};
use java_test_rename::TestSuffixRule;

/// Java Test Naming Repair
///
/// 把含 @Test 但文件名不以 Test 结尾的测试类重命名为 *Test
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 测试源码根目录
    root: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// 输出 JSON 汇总到 stdout
    #[arg(long)]
    json: bool,

    /// 判定为测试文件的标记子串
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// 约定的文件名后缀
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// 源文件扩展名 (不含点)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// 只处理扩展名匹配的文件
    #[arg(long)]
    source_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志 (stderr)，RUST_LOG 优先于 --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let rule = TestSuffixRule {
        marker: args.marker,
        suffix: args.suffix,
        extension: args.extension.trim_start_matches('.').to_string(),
        source_only: args.source_only,
    };

    cli::handle_repair(&args.root, rule, args.json)
}
