use std::fs;
use std::path::Path;

use super::Entry;

/// 指定ディレクトリの直下エントリをすべて集める
///
/// ディレクトリを開けなければエラーを表示して空を返す（呼び出し側の
/// 走査は続行できる）。種別の判定に失敗したエントリは表示して
/// 読み飛ばす。ディレクトリハンドルは収集が終わった時点で閉じる。
pub fn list_children(path: &Path) -> Vec<Entry> {
    let dir = match fs::read_dir(path) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot open directory '{}': {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    // read_dirは"."と".."を返さない
    for item in dir {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                eprintln!("Error: cannot read entry in '{}': {}", path.display(), e);
                continue;
            }
        };

        // statと同じくシンボリックリンクは辿って判定する
        let child = item.path();
        let is_dir = match fs::metadata(&child) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                eprintln!("Error: cannot stat '{}': {}", child.display(), e);
                continue;
            }
        };

        entries.push(Entry {
            name: item.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    entries
}
