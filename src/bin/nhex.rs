//! nhex - Hex dump for the terminal
//!
//! Renders a file as an offset/hex/ASCII table sized to the terminal width.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::terminal;

use nx::dump::{dump_file, row_width, MAX_ROW_WIDTH, MIN_ROW_WIDTH};

/// Display the binary content of a file in hexadecimal format
#[derive(Parser, Debug)]
#[command(name = "nhex")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to display
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Bytes per row (default: sized to the terminal width)
    #[arg(short, long)]
    width: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 出力が端末のときだけ幅を問い合わせる（リダイレクト時は既定の16）
    let stdout = io::stdout();
    let terminal_width = if stdout.is_terminal() {
        terminal::size().ok().map(|(cols, _rows)| cols)
    } else {
        None
    };

    // 明示指定された幅も上下限には収める
    let width = match args.width {
        Some(w) => w.clamp(MIN_ROW_WIDTH, MAX_ROW_WIDTH),
        None => row_width(terminal_width),
    };

    let mut out = stdout.lock();
    dump_file(&args.file, &mut out, width)?;

    Ok(())
}
