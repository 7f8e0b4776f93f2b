use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::repair::FileOutcome;

/// 一次重命名
#[derive(Debug, Serialize)]
pub struct RenameRecord {
    pub from: String,
    pub to: String,
}

/// 一次失败
#[derive(Debug, Serialize)]
pub struct FailureRecord {
    pub path: String,
    pub error: String,
}

/// 整轮修复的汇总，路径相对于 root
#[derive(Debug, Serialize)]
pub struct RepairSummary {
    #[serde(skip)]
    root: PathBuf,
    pub scanned: usize,
    pub renamed: usize,
    pub untouched: usize,
    pub skipped: usize,
    pub failed: usize,
    pub renames: Vec<RenameRecord>,
    pub failures: Vec<FailureRecord>,
}

impl RepairSummary {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            scanned: 0,
            renamed: 0,
            untouched: 0,
            skipped: 0,
            failed: 0,
            renames: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Renamed { from, to } => {
                self.renamed += 1;
                let record = RenameRecord {
                    from: self.relative(&from),
                    to: self.relative(&to),
                };
                self.renames.push(record);
            }
            FileOutcome::Untouched => self.untouched += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed { path, error } => {
                self.failed += 1;
                let record = FailureRecord {
                    path: self.relative(&path),
                    error: error.to_string(),
                };
                self.failures.push(record);
            }
        }
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// 一行摘要，用于日志
    pub fn headline(&self) -> String {
        format!(
            "scanned {} | renamed {} | untouched {} | skipped {} | failed {}",
            self.scanned, self.renamed, self.untouched, self.skipped, self.failed
        )
    }
}
