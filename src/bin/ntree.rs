//! ntree - Directory tree for the terminal
//!
//! Recursively lists a directory in a tree-like format, directories first.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use nx::tree;

/// List the contents of a directory in a tree-like format
#[derive(Parser, Debug)]
#[command(name = "ntree")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to list
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    directory: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 起点のパスは与えられたまま1行目に出す
    writeln!(out, "{}", args.directory.display())?;
    tree::render(&mut out, &args.directory, "")?;

    Ok(())
}
