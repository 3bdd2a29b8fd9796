use clap::ValueEnum;
use std::io::{self, IsTerminal};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Resolves `mode` against `NO_COLOR` and whether stdout is a terminal.
pub fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    }
}
