//! Repair 引擎 - 单线程批量重写
//!
//! 流程：发现 -> 过滤 -> 转换 -> 落盘
//!
//! 错误分两级：
//! 1. 遍历错误：致命，直接返回
//! 2. 单文件错误：读失败静默跳过；写入/重命名失败打印后继续

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::RepairError;
use crate::report::RepairSummary;
use crate::scanner::{walk_files, Action, Candidate, RepairRule};

/// 单文件处理结果
#[derive(Debug)]
pub enum FileOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Untouched,
    /// 读取失败
    Skipped,
    Failed { path: PathBuf, error: RepairError },
}

/// 加载 -> 规划 -> 落盘
pub fn repair_file(rule: &dyn RepairRule, path: &Path) -> FileOutcome {
    let candidate = Candidate::load(path);
    let Some(content) = candidate.content else {
        return FileOutcome::Skipped;
    };

    match rule.plan(&candidate.path, &content) {
        Action::Untouched => FileOutcome::Untouched,
        action => match apply(action) {
            Ok(Some((from, to))) => FileOutcome::Renamed { from, to },
            Ok(None) => FileOutcome::Untouched,
            Err(error) => FileOutcome::Failed {
                path: candidate.path,
                error,
            },
        },
    }
}

/// 执行动作：目标已存在时直接失败，不覆盖，也不写入内容
pub fn apply(action: Action) -> Result<Option<(PathBuf, PathBuf)>, RepairError> {
    let Action::Rename { from, to, content } = action else {
        return Ok(None);
    };

    if to.exists() {
        return Err(RepairError::TargetExists { from, to });
    }

    if let Err(source) = fs::write(&from, content) {
        return Err(RepairError::Write { path: from, source });
    }
    if let Err(source) = fs::rename(&from, &to) {
        return Err(RepairError::Rename { from, to, source });
    }

    Ok(Some((from, to)))
}

/// 对整个目录树执行修复
pub fn repair_tree(root: &Path, rule: &dyn RepairRule) -> Result<RepairSummary> {
    let mut summary = RepairSummary::new(root);

    for path in walk_files(root) {
        let path = path.with_context(|| format!("failed to walk {}", root.display()))?;

        let outcome = repair_file(rule, &path);
        match &outcome {
            FileOutcome::Renamed { from, to } => {
                info!("renamed {} -> {}", from.display(), to.display());
            }
            FileOutcome::Skipped => debug!("skipped unreadable {}", path.display()),
            FileOutcome::Failed { path, error } => {
                error!(path = %path.display(), "{error}");
            }
            FileOutcome::Untouched => {}
        }
        summary.record(outcome);
    }

    Ok(summary)
}
