// ============================================================================
// 快照测试 - 验证汇总输出不退化
// ============================================================================

use java_test_rename::{repair_tree, TestSuffixRule};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_summary_snapshot() {
    let dir = TempDir::new().unwrap();
    let foo = dir.path().join("foo");
    fs::create_dir_all(&foo).unwrap();

    fs::write(
        foo.join("BehaviorCheck.java"),
        "public class BehaviorCheck { @Test void t() {} }",
    )
    .unwrap();
    fs::write(foo.join("PlainHelper.java"), "class PlainHelper { int x; }").unwrap();
    fs::write(foo.join("edgeTest.java"), "class edgeTest { @Test void t() {} }").unwrap();
    fs::write(foo.join("Broken.java"), [b'@', b'T', 0xff, 0xfe]).unwrap();

    let summary = repair_tree(dir.path(), &TestSuffixRule::default()).unwrap();

    insta::assert_json_snapshot!(summary, @r###"
    {
      "scanned": 4,
      "renamed": 1,
      "untouched": 2,
      "skipped": 1,
      "failed": 0,
      "renames": [
        {
          "from": "foo/BehaviorCheck.java",
          "to": "foo/BehaviorCheckTest.java"
        }
      ],
      "failures": []
    }
    "###);
}
