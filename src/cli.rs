use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use java_test_rename::{repair_tree, TestSuffixRule};

/// 执行修复并输出汇总
///
/// 默认 stdout 不输出任何内容，`--json` 时打印完整汇总
pub fn handle_repair(root: &Path, rule: TestSuffixRule, json: bool) -> Result<()> {
    info!("🔧 repairing test names under {}", root.display());

    let summary = repair_tree(root, &rule)?;

    if summary.failed > 0 {
        warn!("{}", summary.headline());
    } else {
        info!("{}", summary.headline());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
