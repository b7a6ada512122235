// changelog data structures

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "This file lists the changes by version.";

/// coerce an explicit json `null` to the field's default value
///
/// hand-edited changelogs sometimes carry `"description": null` or
/// `"tags": null`, which must load like a missing field, not fail
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// a single released (or about to be released) version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// version string exactly as given, no leading "v", never renormalized
    pub version: String,

    /// iso calendar date, kept as a string so foreign values survive round-trips
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub add: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub change: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub remove: Vec<String>,
}

impl VersionEntry {
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            add: Vec::new(),
            change: Vec::new(),
            remove: Vec::new(),
        }
    }
}

/// the whole changelog document as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogDocument {
    pub title: Option<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<VersionEntry>,
}

impl ChangelogDocument {
    /// the document a missing file stands for
    pub fn empty() -> Self {
        Self {
            title: None,
            description: DEFAULT_DESCRIPTION.to_string(),
            tags: Vec::new(),
        }
    }

    /// replace-or-insert an entry for its exact version string
    ///
    /// matching is plain string equality: an entry stored as "1.2" is not
    /// touched by an upsert for "1.2.0" even though both normalize the same
    pub fn upsert_entry(&mut self, entry: VersionEntry) {
        self.tags.retain(|t| t.version != entry.version);
        self.tags.push(entry);
        crate::utils::version::sort_descending(&mut self.tags);
    }

    pub fn find_entry(&self, version: &str) -> Option<&VersionEntry> {
        self.tags.iter().find(|t| t.version == version)
    }
}

impl Default for ChangelogDocument {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_exact_version_match() {
        let mut doc = ChangelogDocument::empty();

        let mut first = VersionEntry::new("1.0.0", "2024-01-01");
        first.add.push("old entry".to_string());
        doc.upsert_entry(first);

        let mut second = VersionEntry::new("1.0.0", "2024-02-01");
        second.add.push("new entry".to_string());
        doc.upsert_entry(second);

        assert_eq!(doc.tags.len(), 1);
        assert_eq!(doc.tags[0].date, "2024-02-01");
        assert_eq!(doc.tags[0].add, vec!["new entry".to_string()]);
    }

    #[test]
    fn test_upsert_does_not_collide_across_normalized_forms() {
        let mut doc = ChangelogDocument::empty();
        doc.upsert_entry(VersionEntry::new("1.2", "2024-01-01"));
        doc.upsert_entry(VersionEntry::new("1.2.0", "2024-02-01"));

        // "1.2" and "1.2.0" rank equal but are distinct entries
        assert_eq!(doc.tags.len(), 2);
    }

    #[test]
    fn test_upsert_keeps_tags_sorted_descending() {
        let mut doc = ChangelogDocument::empty();
        doc.upsert_entry(VersionEntry::new("1.0.0", ""));
        doc.upsert_entry(VersionEntry::new("2.1.0", ""));
        doc.upsert_entry(VersionEntry::new("1.5.0", ""));

        let order: Vec<&str> = doc.tags.iter().map(|t| t.version.as_str()).collect();
        assert_eq!(order, vec!["2.1.0", "1.5.0", "1.0.0"]);
    }

    #[test]
    fn test_null_document_fields_load_as_defaults() {
        let raw = r#"{"title": null, "description": null, "tags": null}"#;
        let doc: ChangelogDocument = serde_json::from_str(raw).unwrap();

        assert_eq!(doc.title, None);
        assert_eq!(doc.description, "");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_null_entry_fields_load_as_defaults() {
        let raw = r#"{
            "tags": [
                {"version": "1.0.0", "date": null, "add": null, "change": null, "remove": null}
            ]
        }"#;
        let doc: ChangelogDocument = serde_json::from_str(raw).unwrap();

        let entry = &doc.tags[0];
        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.date, "");
        assert!(entry.add.is_empty());
        assert!(entry.change.is_empty());
        assert!(entry.remove.is_empty());
    }
}
