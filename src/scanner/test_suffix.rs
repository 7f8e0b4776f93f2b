use super::{Action, RepairRule};
use memchr::memmem;
use std::path::Path;

pub const DEFAULT_MARKER: &str = "@Test";
pub const DEFAULT_SUFFIX: &str = "Test";
pub const DEFAULT_EXTENSION: &str = "java";

/// 测试类命名规则
///
/// 文件内容包含 marker（纯子串匹配，注释/字符串里的也算），
/// 且文件名（忽略大小写）不以 `{suffix}.{extension}` 结尾时，
/// 把类名全局替换为 `{class}{suffix}` 并重命名文件。
#[derive(Debug, Clone)]
pub struct TestSuffixRule {
    pub marker: String,
    pub suffix: String,
    pub extension: String,
    /// 只处理扩展名匹配的源文件
    pub source_only: bool,
}

impl Default for TestSuffixRule {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            source_only: false,
        }
    }
}

impl TestSuffixRule {
    fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }

    /// 是否需要修复
    pub fn qualifies(&self, file_name: &str, content: &str) -> bool {
        if memmem::find(content.as_bytes(), self.marker.as_bytes()).is_none() {
            return false;
        }

        let lower = file_name.to_lowercase();
        let conventional = format!("{}{}", self.suffix, self.dotted_extension()).to_lowercase();
        if lower.ends_with(&conventional) {
            return false;
        }
        if self.source_only && !lower.ends_with(&self.dotted_extension().to_lowercase()) {
            return false;
        }

        !self.class_name(file_name).is_empty()
    }

    /// 文件名去掉扩展名
    pub fn class_name<'a>(&self, file_name: &'a str) -> &'a str {
        if let Some(stem) = file_name.strip_suffix(self.dotted_extension().as_str()) {
            return stem;
        }
        Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name)
    }
}

impl RepairRule for TestSuffixRule {
    fn plan(&self, path: &Path, content: &str) -> Action {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Action::Untouched;
        };
        if !self.qualifies(file_name, content) {
            return Action::Untouched;
        }

        let class_name = self.class_name(file_name);
        let new_class_name = format!("{class_name}{}", self.suffix);
        let new_file_name = format!("{new_class_name}{}", self.dotted_extension());

        Action::Rename {
            from: path.to_path_buf(),
            to: path.with_file_name(new_file_name),
            content: content.replace(class_name, &new_class_name),
        }
    }
}
