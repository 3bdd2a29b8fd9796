//! The core `Daily` struct, providing the primary API for one run.
use crate::config::Config;
use crate::content::{ContentEntry, ContentKind, ContentSource, acquire_content, format_entry_block};
use crate::log_file::{LogDocument, parse_log_content};
use anyhow::Result;
use chrono::{DateTime, TimeZone};
use rand::Rng;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The central struct for a run: fetch one entry, then record it.
#[derive(Debug)]
pub struct Daily {
    pub config: Config,
}

/// What a successful run wrote, and where.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub entry: ContentEntry,
    /// The markdown block exactly as inserted.
    pub block: String,
    pub path: PathBuf,
    /// Entries in the file after the insert, the new one included.
    pub entry_count: usize,
}

impl Daily {
    /// Creates a new `Daily` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn log_path(&self) -> &Path {
        &self.config.log_file
    }

    /// Fetches one entry of `kind` from `source`, falling back to a local fact on failure.
    pub async fn fetch_entry<S, R, Tz>(
        &self,
        source: &S,
        rng: &mut R,
        now: &DateTime<Tz>,
        kind: ContentKind,
    ) -> ContentEntry
    where
        S: ContentSource,
        R: Rng + ?Sized,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        acquire_content(source, rng, now, kind).await
    }

    /// Renders `entry` and inserts it right after the header of the log file.
    ///
    /// Filesystem errors are returned untouched; the file is either fully rewritten or left as it was.
    pub fn record_entry(&self, entry: &ContentEntry) -> Result<RunSummary> {
        let block = format_entry_block(entry, &self.config.date_format, &self.config.time_format);
        let document = LogDocument::new(&self.config.log_file);
        let content = document.insert_entry(&block)?;

        let parsed = parse_log_content(&content, &self.config.date_format);
        for error in &parsed.errors {
            warn!(path = %document.path().display(), "{error}");
        }
        info!(
            path = %document.path().display(),
            kind = entry.kind().name(),
            entries = parsed.entries.len(),
            "recorded entry"
        );

        Ok(RunSummary {
            entry: entry.clone(),
            block,
            path: document.path().to_path_buf(),
            entry_count: parsed.entries.len(),
        })
    }
}
