pub mod acquire;
pub mod content_entry;
pub mod fallback;
pub mod format_utils;
pub mod source;

pub use acquire::{acquire_content, choose_kind};
pub use content_entry::{ContentBody, ContentEntry, ContentKind, ContentOrigin};
pub use fallback::{FALLBACK_FACTS, pick_fallback_fact};
pub use format_utils::format_entry_block;
pub use source::{ContentSource, FetchError, HttpSource, OfflineSource, QuotePayload};
