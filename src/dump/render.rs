use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::DumpError;

/// 入力をrow_widthバイトずつ読み、1チャンクを1行として書き出す
///
/// バッファは最初に1つだけ確保して全行で使い回す。最終行だけ短く
/// なることがあり、ASCII欄には実際に読めたバイトのみを出す。
/// 長さ0の読み取りで終了する。
pub fn dump<R: Read, W: Write>(mut reader: R, writer: &mut W, row_width: usize) -> io::Result<()> {
    let mut buf = vec![0u8; row_width];
    let mut offset: u64 = 0;

    loop {
        let n = fill_chunk(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        write_row(writer, offset, &buf[..n], row_width)?;
        offset += n as u64;
    }

    Ok(())
}

/// ファイルを開いてダンプする
///
/// 開けなければ何も出力せずにエラーを返す。
pub fn dump_file<W: Write>(path: &Path, writer: &mut W, row_width: usize) -> Result<(), DumpError> {
    let file = File::open(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    dump(file, writer, row_width)?;
    Ok(())
}

/// バッファが埋まるかEOFまで読む（freadと同じ詰め方）
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// 1行分を書き出す
///
/// HEX欄はrow_width個のスロットを持ち、データが尽きたスロットは
/// 空白3桁で埋める。中央のスロットの直後に空白を1つ足す。
fn write_row<W: Write>(
    writer: &mut W,
    offset: u64,
    bytes: &[u8],
    row_width: usize,
) -> io::Result<()> {
    write!(writer, "{:08X}: ", offset)?;

    for slot in 0..row_width {
        match bytes.get(slot) {
            Some(b) => write!(writer, "{:02X} ", b)?,
            None => write!(writer, "   ")?,
        }
        if row_width >= 2 && slot == row_width / 2 - 1 {
            write!(writer, " ")?;
        }
    }

    write!(writer, " |")?;
    for &b in bytes {
        let shown = match b {
            0x20..=0x7E => b as char,
            _ => '.',
        };
        write!(writer, "{}", shown)?;
    }
    writeln!(writer, "|")?;

    Ok(())
}
