use super::theme::OneDark;
use daily_core::RunSummary;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::entry_skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    /// Status line, e.g. `Fetching random quote...`.
    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(OneDark::COMMENT));
        } else {
            println!("{message}");
        }
    }

    pub fn print_plain(&self, message: &str) {
        println!("{message}");
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        let mut check = "✓".to_string();
        let mut date = summary.entry.date.format(&self.opts.date_format).to_string();
        let mut kind = summary.entry.kind().name().to_string();
        if self.opts.use_color {
            check = check.with(OneDark::GREEN).to_string();
            date = date.with(OneDark::CYAN).to_string();
            kind = kind.with(OneDark::YELLOW).to_string();
        }

        println!();
        self.print_md(&summary.block);
        println!("{check} Daily content added successfully!");
        println!("  Date: {date}");
        println!("  Type: {kind}");
        println!(
            "  File: {} ({} {})",
            summary.path.display(),
            summary.entry_count,
            if summary.entry_count == 1 { "entry" } else { "entries" }
        );
    }
}
