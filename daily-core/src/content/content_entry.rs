use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// The two categories of daily content.
///
/// Parsing is case-insensitive, so `quote`, `Quote` and `QUOTE` are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ContentKind {
    Quote,
    Fact,
}

impl ContentKind {
    /// `Quote` or `Fact`.
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Quote => "Quote",
            ContentKind::Fact => "Fact",
        }
    }

    /// The bold label written above the entry body.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Quote => "Quote of the Day:",
            ContentKind::Fact => "Fact of the Day:",
        }
    }

    /// Reverse of [`label`](Self::label). The surrounding `**` must already be stripped.
    pub fn from_label(label: &str) -> Option<Self> {
        ContentKind::iter().find(|kind| kind.label() == label.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    Quote { text: String, author: String },
    Fact { text: String },
}

impl ContentBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentBody::Quote { .. } => ContentKind::Quote,
            ContentBody::Fact { .. } => ContentKind::Fact,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBody::Quote { text, .. } | ContentBody::Fact { text } => text,
        }
    }
}

/// Where the body of an entry came from. Never written to the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Remote,
    Fallback,
}

/// One quote or fact, stamped with the moment it was acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Zone label as rendered by `%Z` (e.g. `UTC`, `+02:00`).
    pub zone: String,
    pub body: ContentBody,
    pub origin: ContentOrigin,
}

impl ContentEntry {
    pub fn new<Tz>(at: &DateTime<Tz>, body: ContentBody, origin: ContentOrigin) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            date: at.date_naive(),
            time: at.time(),
            zone: at.format("%Z").to_string(),
            body,
            origin,
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.body.kind()
    }
}
