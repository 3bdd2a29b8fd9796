//! Parses the content of a log file back into its header and entries.
use super::format_utils::find_insertion_point;
use crate::content::ContentKind;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^### (?P<date>.+?) at (?P<time>.+)$").expect("valid heading regex"));

static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(?P<label>.+)\*\*$").expect("valid label regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub date: NaiveDate,
    /// Time and zone exactly as written in the heading (e.g. `09:30 AM UTC`).
    pub time: String,
    pub kind: ContentKind,
    /// Everything between the label and the closing separator, trimmed.
    pub body: String,
}

#[derive(Debug)]
pub struct ParseResult {
    pub header: String,
    /// In file order, so newest first.
    pub entries: Vec<ParsedEntry>,
    pub errors: Vec<String>,
}

/// Splits a log file into its header and entries.
///
/// Malformed entries are reported in `errors` and skipped; they never abort the parse.
/// `date_format` must be the format the headings were written with.
pub fn parse_log_content(content: &str, date_format: &str) -> ParseResult {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    let Some(header_end) = find_insertion_point(content) else {
        errors.push("Missing header: expected a `---` line followed by a blank line.".to_string());
        return ParseResult {
            header: String::new(),
            entries,
            errors,
        };
    };
    let header = content[..header_end].to_string();

    let mut blocks: Vec<(&str, Vec<&str>)> = Vec::new();
    for line in content[header_end..].lines() {
        if HEADING_RE.is_match(line) {
            blocks.push((line, Vec::new()));
        } else if let Some((_, body)) = blocks.last_mut() {
            body.push(line);
        } else if !line.trim().is_empty() {
            errors.push(format!("Text outside of any entry: `{line}`."));
        }
    }

    for (heading, lines) in blocks {
        match parse_block(heading, &lines, date_format) {
            Ok(entry) => entries.push(entry),
            Err(error) => errors.push(error),
        }
    }

    ParseResult {
        header,
        entries,
        errors,
    }
}

fn parse_block(heading: &str, lines: &[&str], date_format: &str) -> Result<ParsedEntry, String> {
    let caps = HEADING_RE
        .captures(heading)
        .ok_or_else(|| format!("Invalid entry heading `{heading}`."))?;
    let date = NaiveDate::parse_from_str(&caps["date"], date_format).map_err(|_| {
        format!("Invalid date in entry heading `{heading}`. Expected format `{date_format}`.")
    })?;
    let time = caps["time"].trim().to_string();

    let mut rest = lines.iter().skip_while(|line| line.trim().is_empty());
    let label_line = rest
        .next()
        .ok_or_else(|| format!("Entry `{heading}` has no label."))?;
    let kind = LABEL_RE
        .captures(label_line.trim())
        .and_then(|caps| ContentKind::from_label(&caps["label"]))
        .ok_or_else(|| {
            format!("Invalid label `{label_line}` in entry `{heading}`. Expected `**Quote of the Day:**` or `**Fact of the Day:**`.")
        })?;

    let body = rest.copied().collect::<Vec<_>>().join("\n");
    let body = body.trim_end();
    let body = body
        .strip_suffix("---")
        .ok_or_else(|| format!("Entry `{heading}` is not closed by a `---` separator."))?;

    Ok(ParsedEntry {
        date,
        time,
        kind,
        body: body.trim().to_string(),
    })
}
