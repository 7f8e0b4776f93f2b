// ============================================================================
// 扫描模块 - 候选文件发现 + 修复规则抽象
// ============================================================================

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod test_suffix;

/// 单个被访问文件的临时视图
///
/// `content` 为 `None` 表示读取失败（权限、编码、IO），该文件会被静默跳过。
#[derive(Debug)]
pub struct Candidate {
    pub path: PathBuf,
    pub content: Option<String>,
}

impl Candidate {
    /// 读取完整文件内容，失败不报错
    pub fn load(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            content: std::fs::read_to_string(path).ok(),
        }
    }
}

/// 规则对单个文件给出的处理动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 不修改
    Untouched,
    /// 重写内容并重命名
    Rename {
        from: PathBuf,
        to: PathBuf,
        content: String,
    },
}

/// 修复规则 Trait
///
/// 纯函数：(path, content) -> Action，不访问文件系统
pub trait RepairRule {
    fn plan(&self, path: &Path, content: &str) -> Action;
}

/// 递归遍历 root 下所有普通文件
///
/// 同一目录的条目按文件名排序后一次性读入，重命名后的新文件不会在本轮被再次访问。
/// 遍历错误（root 不存在、目录不可读）作为 `Err` 返回，由调用方决定是否终止。
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(err.into())),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_only_regular_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/Deep.java"), "x").unwrap();
        fs::write(dir.path().join("Top.java"), "y").unwrap();

        let files: Vec<PathBuf> = walk_files(dir.path()).collect::<Result<_>>().unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_walk_files_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let first = walk_files(&missing).next();
        assert!(matches!(first, Some(Err(_))));
    }

    #[test]
    fn test_candidate_load_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Binary.java");
        fs::write(&path, [0xff, 0xfe, 0x00, b'@']).unwrap();

        let candidate = Candidate::load(&path);
        assert_eq!(candidate.path, path);
        assert!(candidate.content.is_none());
    }
}
