/// 端末幅が分からないときの1行あたりバイト数
pub const DEFAULT_ROW_WIDTH: usize = 16;
/// 1行あたりバイト数の下限（これ未満は読みにくい）
pub const MIN_ROW_WIDTH: usize = 4;
/// 1行あたりバイト数の上限（大画面でも広げすぎない）
pub const MAX_ROW_WIDTH: usize = 64;

/// 1行の固定部: オフセット"XXXXXXXX: "10桁 + 中央の空白1 + " |"2 + 閉じ"|"1
const FIXED_COLS: usize = 14;
/// 1バイトあたりの桁数: HEX欄"XX "3桁 + ASCII欄1桁
const COLS_PER_BYTE: usize = 4;

/// 端末幅から1行あたりのバイト数を求める
///
/// 1行は `4N + 14` 桁を使うので、端末幅に収まる最大のNを
/// [MIN, MAX]に丸めて返す。端末幅が不明（リダイレクト等）なら既定値。
/// 中央の区切り空白を中心に保つため、1より大きい奇数は偶数に丸める。
pub fn row_width(terminal_width: Option<u16>) -> usize {
    let Some(width) = terminal_width else {
        return DEFAULT_ROW_WIDTH;
    };

    let candidate = (width as usize).saturating_sub(FIXED_COLS) / COLS_PER_BYTE;
    let mut n = candidate.clamp(MIN_ROW_WIDTH, MAX_ROW_WIDTH);

    if n % 2 != 0 && n > 1 {
        n -= 1;
    }
    n
}
