//! Java Test Naming Repair
//!
//! 扫描测试源码目录，把含 `@Test` 但文件名不以 `Test` 结尾的类
//! 重命名为 `*Test`，让 surefire 等按文件名发现测试的 runner 能找到它们。

pub mod error;
pub mod repair;
pub mod report;
pub mod scanner;

pub use error::RepairError;
pub use repair::{repair_file, repair_tree, FileOutcome};
pub use report::RepairSummary;
pub use scanner::test_suffix::TestSuffixRule;
pub use scanner::{Action, Candidate, RepairRule};
