use std::io::{self, Write};
use std::path::Path;

use super::list_children;

/// 兄弟が続くエントリの枝
const BRANCH: &str = "├── ";
/// 最後のエントリの枝
const LAST_BRANCH: &str = "└── ";
/// 兄弟が続く先祖レベルの字下げ
const PIPE_INDENT: &str = "│   ";
/// 最後の兄弟だった先祖レベルの字下げ
const BLANK_INDENT: &str = "    ";

/// pathの直下を再帰的にツリー表示する
///
/// 子を集めて整列し、1行ずつ接続記号付きで出力する。ディレクトリは
/// prefixを1レベル分延ばして深さ優先で下る。prefixは呼び出しごとに
/// 新しく組み立て、兄弟間で共有しない。
pub fn render<W: Write>(writer: &mut W, path: &Path, prefix: &str) -> io::Result<()> {
    let mut entries = list_children(path);
    entries.sort();

    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == entries.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        writeln!(writer, "{}{}{}", prefix, connector, entry.name)?;

        if entry.is_dir {
            let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
            let child_prefix = format!("{}{}", prefix, indent);
            render(writer, &path.join(&entry.name), &child_prefix)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn render_to_string(path: &Path) -> String {
        let mut out = Vec::new();
        render(&mut out, path, "").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn directories_sort_before_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let expected = "\
├── alpha
├── zeta
├── a.txt
└── b.txt
";
        assert_eq!(render_to_string(dir.path()), expected);
    }

    #[test]
    fn last_directory_gets_blank_indent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("first")).unwrap();
        File::create(dir.path().join("first").join("x")).unwrap();
        fs::create_dir(dir.path().join("second")).unwrap();
        File::create(dir.path().join("second").join("y")).unwrap();

        let expected = "\
├── first
│   └── x
└── second
    └── y
";
        assert_eq!(render_to_string(dir.path()), expected);
    }

    #[test]
    fn nested_depth_extends_prefix_per_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a").join("b")).unwrap();
        File::create(dir.path().join("a").join("b").join("leaf")).unwrap();
        File::create(dir.path().join("tail")).unwrap();

        let expected = "\
├── a
│   └── b
│       └── leaf
└── tail
";
        assert_eq!(render_to_string(dir.path()), expected);
    }

    #[test]
    fn empty_directory_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(render_to_string(dir.path()), "");
    }

    #[test]
    fn missing_directory_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert_eq!(render_to_string(&missing), "");
    }
}
