use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 单文件修复失败（写入或重命名阶段）
#[derive(Debug, Error)]
pub enum RepairError {
    #[error("target already exists: {}", to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 内容已写入，但文件名未改（不回滚）
    #[error("failed to rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
