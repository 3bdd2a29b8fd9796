mod cli;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::Cli;
use daily_core::{ContentOrigin, Daily, HttpSource, OfflineSource, content::choose_kind};
use render::{RenderOptions, Renderer, use_color};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging() {
        eprintln!("daily: could not set up logging: {e:#}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daily: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `DAILY_DEBUG_LOG=<path>` sends debug logs to a file, otherwise warnings go to stderr.
/// The stderr level can be changed with `DAILY_LOG` (e.g. `DAILY_LOG=debug`).
fn init_logging() -> Result<()> {
    if let Ok(log_path) = std::env::var("DAILY_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("DAILY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Daily::new()?.config;
    if let Some(file) = cli.file {
        config = config.with_log_file(file);
    }
    let daily = Daily::with_config(config);

    let renderer = Renderer::new(RenderOptions {
        date_format: daily.config.date_format.clone(),
        use_color: use_color(cli.color),
    });

    if cli.path {
        renderer.print_plain(&format!("{}", daily.log_path().display()));
        return Ok(());
    }

    let mut rng = rand::rng();
    let now = Local::now();
    let kind = cli.kind.unwrap_or_else(|| choose_kind(&mut rng));

    renderer.print_info(&format!(
        "Fetching random {}...",
        kind.name().to_lowercase()
    ));
    let entry = if cli.offline {
        daily.fetch_entry(&OfflineSource, &mut rng, &now, kind).await
    } else {
        let source = HttpSource::from_config(&daily.config)?;
        daily.fetch_entry(&source, &mut rng, &now, kind).await
    };
    if entry.origin == ContentOrigin::Fallback {
        renderer.print_info(&format!(
            "{} source unavailable, using fallback fact...",
            kind.name()
        ));
    }

    let summary = daily.record_entry(&entry)?;
    renderer.print_summary(&summary);
    Ok(())
}
