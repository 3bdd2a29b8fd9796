pub mod config;
pub mod content;
pub mod daily;
pub mod log_file;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use content::{
    ContentBody, ContentEntry, ContentKind, ContentOrigin, ContentSource, FetchError, HttpSource,
    OfflineSource,
};
pub use daily::{Daily, RunSummary};
pub use log_file::{LogDocument, ParseResult, ParsedEntry};
