mod layout;
mod render;

pub use layout::{row_width, DEFAULT_ROW_WIDTH, MAX_ROW_WIDTH, MIN_ROW_WIDTH};
pub use render::{dump, dump_file};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ダンプ処理のエラー
#[derive(Debug, Error)]
pub enum DumpError {
    /// 入力ファイルを開けない
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// 読み書きの失敗
    #[error(transparent)]
    Io(#[from] io::Error),
}
