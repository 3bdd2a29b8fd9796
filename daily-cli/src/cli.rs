use clap::Parser;
use daily_core::ContentKind;
use std::path::PathBuf;

use crate::render::ColorMode;

/// daily — adds a random quote or fact to a markdown log
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the log file path and exits. Honours `--file` and `DAILY_FILE`.
    #[arg(long, short, conflicts_with_all = ["kind", "offline"])]
    pub path: bool,
    /// Log file to write to (default: `daily-content.md` in the working directory)
    #[arg(long, short, env = "DAILY_FILE")]
    pub file: Option<PathBuf>,
    /// Fetch this kind instead of flipping a coin
    #[arg(long, short, value_name = "quote|fact")]
    pub kind: Option<ContentKind>,
    /// Skip the network and use a fallback fact
    #[arg(long)]
    pub offline: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}
