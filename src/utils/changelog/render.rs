// markdown rendering of the changelog document

use super::store::load_document;
use super::types::{ChangelogDocument, VersionEntry};
use crate::error::{Error, Result};
use crate::utils::config::FormatConfig;
use crate::utils::version::sort_descending;
use chrono::{DateTime, NaiveDate};
use std::path::Path;

const DEFAULT_TITLE: &str = "CHANGELOG";

/// pretty-print an entry date as "DD Mon YYYY"
///
/// empty input stays empty, anything that does not parse as a date is
/// returned verbatim rather than reformatted
fn format_entry_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => date.to_string(),
    }
}

fn push_bucket(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(format!("### {}", heading));
    lines.push(String::new());

    if items.is_empty() {
        lines.push("-".to_string());
    } else {
        for item in items {
            lines.push(format!("- {}", item));
        }
    }

    lines.push(String::new());
}

fn push_entry(lines: &mut Vec<String>, entry: &VersionEntry) {
    let nice_date = format_entry_date(&entry.date);
    let date_suffix = if nice_date.is_empty() {
        String::new()
    } else {
        format!(" ({})", nice_date)
    };

    lines.push(format!("## v{}{}", entry.version, date_suffix));
    lines.push(String::new());

    // fixed bucket order regardless of which buckets have content
    push_bucket(lines, "Add", &entry.add);
    push_bucket(lines, "Change", &entry.change);
    push_bucket(lines, "Remove", &entry.remove);
}

/// render the whole document into a markdown string
///
/// entries are emitted newest first, trailing blank lines are trimmed and a
/// single final newline appended
pub fn render_document(doc: &ChangelogDocument) -> String {
    let title = match &doc.title {
        Some(t) if !t.is_empty() => t.as_str(),
        _ => DEFAULT_TITLE,
    };

    let mut entries = doc.tags.clone();
    sort_descending(&mut entries);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# {}", title));
    lines.push(String::new());

    let description = doc.description.trim();
    if !description.is_empty() {
        lines.push(description.to_string());
        lines.push(String::new());
    }

    for entry in &entries {
        push_entry(&mut lines, entry);
    }

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// full renderer operation: load, render, format, write
///
/// repairs broken json in memory only, the source file is left untouched
pub fn render_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    json_path: P,
    md_path: Q,
) -> Result<String> {
    let md_path = md_path.as_ref();

    let doc = load_document(json_path)?;
    let rendered = render_document(&doc);

    let config = FormatConfig::resolve_for_path(md_path);
    let formatted = config.apply_to_text(&rendered);

    std::fs::write(md_path, &formatted).map_err(|e| Error::FileWriteError {
        path: md_path.to_path_buf(),
        source: e,
    })?;

    Ok(formatted)
}
