use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use directories::BaseDirs;
use serde::Deserialize;
use std::fmt::{Display, Write};
use std::{fs, path::PathBuf};
use tracing::warn;

const DEFAULT_LOG_FILE: &str = "daily-content.md";
const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
const DEFAULT_FACT_URL: &str = "http://numbersapi.com/random/trivia";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone)]
pub struct Config {
    /// Markdown file entries are written to. Relative paths resolve against the working directory.
    pub log_file: PathBuf,
    /// Endpoint returning `{"content": ..., "author": ...}`.
    pub quote_url: String,
    /// Endpoint returning `{"text": ...}` or a plain-text sentence.
    pub fact_url: String,
    /// Date part of entry headings. Default is `%Y-%m-%d`.
    ///
    /// Headings are read back to count entries, so the format must parse back to the same
    /// date (it needs a year, month and day) and must not contain ` at `, which separates
    /// the date from the time. Formats breaking either rule are replaced by the default.
    pub date_format: String,
    /// Time part of entry headings, the zone label is appended. Default is `%I:%M %p`.
    pub time_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    log_file: Option<PathBuf>,
    quote_url: Option<String>,
    fact_url: Option<String>,
    date_format: Option<String>,
    time_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            fact_url: DEFAULT_FACT_URL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A broken config file is reported and ignored, the run goes on with defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Replaces the log file path, e.g. from a command line flag.
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            log_file: file_config.log_file.unwrap_or(defaults.log_file),
            quote_url: file_config.quote_url.unwrap_or(defaults.quote_url),
            fact_url: file_config.fact_url.unwrap_or(defaults.fact_url),
            date_format: Self::checked_format(
                file_config.date_format,
                defaults.date_format,
                Self::is_valid_date_format,
            ),
            time_format: Self::checked_format(
                file_config.time_format,
                defaults.time_format,
                Self::is_valid_format,
            ),
        }
    }

    /// Keeps a user supplied strftime format only if `is_valid` accepts it.
    fn checked_format(
        format: Option<String>,
        default: String,
        is_valid: fn(&str) -> bool,
    ) -> String {
        match format {
            Some(f) if is_valid(&f) => f,
            Some(f) => {
                warn!("invalid format `{f}` in config, using `{default}`");
                default
            }
            None => default,
        }
    }

    /// chrono can render it for a time of day, on one line.
    fn is_valid_format(format: &str) -> bool {
        NaiveTime::from_hms_opt(9, 30, 0)
            .and_then(|sample| Self::render(format, sample.format(format)))
            .is_some()
    }

    /// Like [`is_valid_format`](Self::is_valid_format) for a date, which must also parse back
    /// to the same date and keep clear of the ` at ` separator.
    fn is_valid_date_format(format: &str) -> bool {
        let Some(sample) = NaiveDate::from_ymd_opt(2025, 8, 15) else {
            return false;
        };
        match Self::render(format, sample.format(format)) {
            Some(rendered) => {
                format!("{rendered} at ").find(" at ") == Some(rendered.len())
                    && NaiveDate::parse_from_str(&rendered, format).ok() == Some(sample)
            }
            None => false,
        }
    }

    fn render(format: &str, formatted: impl Display) -> Option<String> {
        if format.trim().is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return None;
        }
        let mut out = String::new();
        write!(out, "{formatted}").ok()?;
        (!out.contains('\n')).then_some(out)
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daily")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daily").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
