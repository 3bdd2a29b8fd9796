pub mod format_utils;
pub mod log_document;
pub mod parse_entries;

pub use format_utils::{SEPARATOR, format_log_header, splice_entry};
pub use log_document::LogDocument;
pub use parse_entries::{ParseResult, ParsedEntry, parse_log_content};
