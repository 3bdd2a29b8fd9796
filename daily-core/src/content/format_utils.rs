use super::content_entry::{ContentBody, ContentEntry};
use crate::log_file::SEPARATOR;
use chrono::{NaiveDate, NaiveTime};

/// Returns an output like this: `### 2025-08-15 at 09:30 AM UTC`
pub fn format_entry_heading(
    date_format: &str,
    time_format: &str,
    date: NaiveDate,
    time: NaiveTime,
    zone: &str,
) -> String {
    let date = date.format(date_format);
    let time = time.format(time_format);
    if zone.trim().is_empty() {
        format!("### {date} at {time}\n\n")
    } else {
        format!("### {date} at {time} {zone}\n\n")
    }
}

/// Render an entry block, separator included.
///
/// ```text
/// ### 2025-08-15 at 09:30 AM UTC
///
/// **Quote of the Day:**
/// > "Well begun is half done."
/// >
/// > — *Aristotle*
///
/// ---
///
/// ```
pub fn format_entry_block(entry: &ContentEntry, date_format: &str, time_format: &str) -> String {
    let heading = format_entry_heading(
        date_format,
        time_format,
        entry.date,
        entry.time,
        &entry.zone,
    );
    let label = entry.kind().label();
    let body = match &entry.body {
        ContentBody::Quote { text, author } => format_quote_body(text, author),
        ContentBody::Fact { text } => text.trim().to_string(),
    };
    format!("{heading}**{label}**\n{body}\n\n{SEPARATOR}")
}

/// Every line of the quote goes into the blockquote, so multi-line quotes stay quoted.
fn format_quote_body(text: &str, author: &str) -> String {
    let quoted = format!("\"{}\"", text.trim());
    let mut lines: Vec<String> = quoted.lines().map(|line| format!("> {line}")).collect();
    lines.push(">".to_string());
    let author = if author.trim().is_empty() {
        "Unknown"
    } else {
        author.trim()
    };
    lines.push(format!("> — *{author}*"));
    lines.join("\n")
}
