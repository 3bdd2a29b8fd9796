/// Closes the header and every entry block.
pub const SEPARATOR: &str = "---\n\n";

pub const LOG_TITLE: &str = "Daily Quotes & Facts";
pub const LOG_DESCRIPTION: &str = "Automatically generated daily content.";

/// Returns the fixed preamble of a new log file:
///
/// ```text
/// # Daily Quotes & Facts
///
/// Automatically generated daily content.
///
/// ---
///
/// ```
pub fn format_log_header() -> String {
    format!("# {LOG_TITLE}\n\n{LOG_DESCRIPTION}\n\n{SEPARATOR}")
}

/// Byte offset right after the first separator, where new entries go.
pub fn find_insertion_point(content: &str) -> Option<usize> {
    content
        .find(SEPARATOR)
        .map(|start| start + SEPARATOR.len())
}

/// Inserts `block` directly after the header of `content`.
///
/// Text without any separator has no usable header, so the fixed header is put in
/// front of the block and the old text is kept below it.
pub fn splice_entry(content: &str, block: &str) -> String {
    match find_insertion_point(content) {
        Some(at) => {
            let mut out = String::with_capacity(content.len() + block.len());
            out.push_str(&content[..at]);
            out.push_str(block);
            out.push_str(&content[at..]);
            out
        }
        None => format!("{}{block}{content}", format_log_header()),
    }
}
