// json changelog load/repair/save

use super::types::ChangelogDocument;
use crate::error::{Error, Result};
use crate::utils::config::FormatConfig;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static LONE_COMMA_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*,\s*$").expect("invalid regex"));

static TRAILING_COMMA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([\]}])").expect("invalid regex"));

/// best-effort cleanup of hand-edited json
///
/// this is a heuristic, not a recovering parser: it only fixes lines that
/// consist of a single comma and commas trailing before `]` or `}`,
/// everything else still has to be valid json
pub fn repair_json_text(raw: &str) -> String {
    let stripped = LONE_COMMA_LINE_REGEX.replace_all(raw, "");
    TRAILING_COMMA_REGEX.replace_all(&stripped, "$1").into_owned()
}

fn parse_with_repair(path: &Path, raw: &str) -> Result<(ChangelogDocument, bool)> {
    match serde_json::from_str(raw) {
        Ok(doc) => Ok((doc, false)),
        Err(_) => {
            let fixed = repair_json_text(raw);
            let doc = serde_json::from_str(&fixed).map_err(|e| Error::JsonParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok((doc, true))
        }
    }
}

/// load a changelog document, repairing in memory only
///
/// a missing file is not an error and stands for the empty document
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ChangelogDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ChangelogDocument::empty());
    }

    let raw = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (doc, _) = parse_with_repair(path, &raw)?;
    Ok(doc)
}

/// load a changelog document and, if the repair heuristic kicked in,
/// immediately rewrite the file in canonical form
///
/// persisting right away means the repaired file survives even when a
/// later step of the run fails
pub fn load_document_repairing<P: AsRef<Path>>(path: P) -> Result<ChangelogDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ChangelogDocument::empty());
    }

    let raw = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (doc, repaired) = parse_with_repair(path, &raw)?;
    if repaired {
        let canonical = to_pretty_json(&doc, &FormatConfig::default())?;
        fs::write(path, canonical).map_err(|e| Error::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(doc)
}

/// serialize a document honoring the formatting configuration
pub fn to_pretty_json(doc: &ChangelogDocument, config: &FormatConfig) -> Result<String> {
    let indent = " ".repeat(config.indent_width);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .map_err(|e| Error::JsonSerializeError { source: e })?;

    let mut text = String::from_utf8_lossy(&buf).into_owned();
    if config.final_newline && !text.ends_with('\n') {
        text.push('\n');
    }

    Ok(text)
}

/// whole-file rewrite of the changelog document
pub fn save_document<P: AsRef<Path>>(
    path: P,
    doc: &ChangelogDocument,
    config: &FormatConfig,
) -> Result<()> {
    let path = path.as_ref();
    let text = to_pretty_json(doc, config)?;

    fs::write(path, text).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
