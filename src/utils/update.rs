// updater: range resolution, classification, merge, persist

use crate::error::Result;
use crate::utils::changelog::{
    load_document_repairing, save_document, ChangelogDocument, VersionEntry,
};
use crate::utils::classify::classify_commits;
use crate::utils::config::FormatConfig;
use crate::utils::git_ops::{CommitRange, CommitSource, TagInfo};
use crate::utils::version::{Semver, VersionInfo};
use chrono::Utc;
use std::path::Path;

/// which commits belong to the target version, before any git lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangePlan {
    /// target is tagged and a lesser tag exists
    TagToTag { from: String, to: String },
    /// target is tagged and is the oldest semantic tag
    TagReachable(String),
    /// target is not tagged yet, measure from the previous release
    TagToHead(String),
    /// nothing to anchor on, take the whole history
    WholeHistory,
}

/// greatest tag strictly below the target triple
pub fn find_prev_tag<'a>(tags: &'a [TagInfo], target: Semver) -> Option<&'a TagInfo> {
    tags.iter()
        .filter(|t| t.triple() < target)
        .max_by_key(|t| t.triple())
}

/// range selection policy, pure over the tag list
///
/// priority order: an existing tag for the target wins, then a parseable
/// target measured against HEAD, then the whole history
pub fn plan_range(target: Option<&VersionInfo>, tags: &[TagInfo]) -> RangePlan {
    let Some(target) = target else {
        return RangePlan::WholeHistory;
    };
    if tags.is_empty() {
        return RangePlan::WholeHistory;
    }

    if let Some(current) = tags.iter().find(|t| t.normalized == target.normalized) {
        return match find_prev_tag(tags, current.triple()) {
            Some(prev) => RangePlan::TagToTag {
                from: prev.name.clone(),
                to: current.name.clone(),
            },
            None => RangePlan::TagReachable(current.name.clone()),
        };
    }

    match find_prev_tag(tags, target.triple()) {
        Some(prev) => RangePlan::TagToHead(prev.name.clone()),
        None => RangePlan::WholeHistory,
    }
}

fn realize_plan(plan: RangePlan, source: &impl CommitSource) -> Result<CommitRange> {
    Ok(match plan {
        RangePlan::TagToTag { from, to } => CommitRange::Between { from, to },
        RangePlan::TagReachable(tag) => CommitRange::Reachable(tag),
        RangePlan::TagToHead(prev) => CommitRange::Between {
            from: prev,
            to: "HEAD".to_string(),
        },
        RangePlan::WholeHistory => CommitRange::Between {
            from: source.oldest_commit()?,
            to: "HEAD".to_string(),
        },
    })
}

/// commit subjects belonging to the target version
pub fn commits_for_version(source: &impl CommitSource, version: &str) -> Result<Vec<String>> {
    let target = VersionInfo::parse_strict(version);
    let tags = source.semver_tags();

    let plan = plan_range(target.as_ref(), &tags);
    let range = realize_plan(plan, source)?;

    Ok(source.subjects_in(&range))
}

/// build the version entry for an updater run
pub fn build_entry(source: &impl CommitSource, version: &str, date: String) -> Result<VersionEntry> {
    let subjects = commits_for_version(source, version)?;
    let classified = classify_commits(&subjects);

    let mut entry = VersionEntry::new(version, date);
    entry.add = classified.add;
    entry.change = classified.change;
    entry.remove = classified.remove;
    Ok(entry)
}

/// full updater operation: load (repairing), derive the entry, upsert, save
pub fn update_changelog<P: AsRef<Path>>(
    source: &impl CommitSource,
    version: &str,
    json_path: P,
) -> Result<ChangelogDocument> {
    let json_path = json_path.as_ref();

    let mut doc = load_document_repairing(json_path)?;

    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let entry = build_entry(source, version, today)?;
    doc.upsert_entry(entry);

    let config = FormatConfig::resolve_for_path(json_path);
    save_document(json_path, &doc, &config)?;

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    struct StubSource {
        tags: Vec<TagInfo>,
        subjects: Vec<String>,
        first: Option<String>,
        requested: RefCell<Vec<CommitRange>>,
    }

    impl StubSource {
        fn new(tag_names: &[&str], subjects: &[&str]) -> Self {
            Self {
                tags: tag_names
                    .iter()
                    .filter_map(|n| TagInfo::from_name(n))
                    .collect(),
                subjects: subjects.iter().map(|s| s.to_string()).collect(),
                first: Some("rootsha".to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommitSource for StubSource {
        fn semver_tags(&self) -> Vec<TagInfo> {
            self.tags.clone()
        }

        fn subjects_in(&self, range: &CommitRange) -> Vec<String> {
            self.requested.borrow_mut().push(range.clone());
            self.subjects.clone()
        }

        fn oldest_commit(&self) -> Result<String> {
            self.first.clone().ok_or_else(|| Error::ChangelogError {
                reason: "repository has no commits".to_string(),
            })
        }
    }

    fn tags(names: &[&str]) -> Vec<TagInfo> {
        names.iter().filter_map(|n| TagInfo::from_name(n)).collect()
    }

    #[test]
    fn test_find_prev_tag_picks_tightest_lower_bound() {
        let tags = tags(&["v0.9.0", "v1.0.0", "v1.1.0", "v2.0.0"]);
        let target = Semver {
            major: 1,
            minor: 1,
            patch: 0,
        };
        let prev = find_prev_tag(&tags, target).unwrap();
        assert_eq!(prev.name, "v1.0.0");
    }

    #[test]
    fn test_find_prev_tag_excludes_equal_versions() {
        let tags = tags(&["v1.0.0"]);
        let target = Semver {
            major: 1,
            minor: 0,
            patch: 0,
        };
        assert!(find_prev_tag(&tags, target).is_none());
    }

    #[test]
    fn test_plan_tagged_target_with_predecessor() {
        let tags = tags(&["v1.0.0", "v1.1.0"]);
        let target = VersionInfo::parse_strict("1.1.0").unwrap();

        let plan = plan_range(Some(&target), &tags);
        assert_eq!(
            plan,
            RangePlan::TagToTag {
                from: "v1.0.0".to_string(),
                to: "v1.1.0".to_string(),
            }
        );
    }

    #[test]
    fn test_plan_tagged_target_without_predecessor() {
        let tags = tags(&["v1.0.0", "v2.0.0"]);
        let target = VersionInfo::parse_strict("1.0.0").unwrap();

        let plan = plan_range(Some(&target), &tags);
        assert_eq!(plan, RangePlan::TagReachable("v1.0.0".to_string()));
    }

    #[test]
    fn test_plan_matches_tag_by_normalized_form() {
        // tag "v1.2" normalizes to 1.2.0, the target "1.2.0" must find it
        let tags = tags(&["v1.0.0", "v1.2"]);
        let target = VersionInfo::parse_strict("1.2.0").unwrap();

        let plan = plan_range(Some(&target), &tags);
        assert_eq!(
            plan,
            RangePlan::TagToTag {
                from: "v1.0.0".to_string(),
                to: "v1.2".to_string(),
            }
        );
    }

    #[test]
    fn test_plan_untagged_target_measures_from_previous_release() {
        let tags = tags(&["v1.0.0", "v1.1.0"]);
        let target = VersionInfo::parse_strict("1.2.0").unwrap();

        let plan = plan_range(Some(&target), &tags);
        assert_eq!(plan, RangePlan::TagToHead("v1.1.0".to_string()));
    }

    #[test]
    fn test_plan_unparseable_target_takes_whole_history() {
        let tags = tags(&["v1.0.0"]);
        assert_eq!(plan_range(None, &tags), RangePlan::WholeHistory);
    }

    #[test]
    fn test_plan_without_tags_takes_whole_history() {
        let target = VersionInfo::parse_strict("1.0.0").unwrap();
        assert_eq!(plan_range(Some(&target), &[]), RangePlan::WholeHistory);
    }

    #[test]
    fn test_commits_for_version_resolves_whole_history_from_first_commit() {
        let source = StubSource::new(&[], &["feat: one"]);
        let subjects = commits_for_version(&source, "1.0.0").unwrap();
        assert_eq!(subjects, vec!["feat: one"]);

        let requested = source.requested.borrow();
        assert_eq!(
            requested[0],
            CommitRange::Between {
                from: "rootsha".to_string(),
                to: "HEAD".to_string(),
            }
        );
    }

    #[test]
    fn test_commits_for_version_uses_tag_range() {
        let source = StubSource::new(&["v1.0.0", "v1.1.0"], &["fix: bug"]);
        commits_for_version(&source, "1.1.0").unwrap();

        let requested = source.requested.borrow();
        assert_eq!(
            requested[0],
            CommitRange::Between {
                from: "v1.0.0".to_string(),
                to: "v1.1.0".to_string(),
            }
        );
    }

    #[test]
    fn test_build_entry_classifies_subjects() {
        let source = StubSource::new(
            &[],
            &[
                "feat(ui): add button",
                "fix: null deref",
                "chore: bump deps",
                "remove(api): old endpoint",
            ],
        );

        let entry = build_entry(&source, "1.0.0", "2024-01-01".to_string()).unwrap();
        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.add, vec!["(ui) add button"]);
        assert_eq!(entry.change, vec!["null deref"]);
        assert_eq!(entry.remove, vec!["(api) old endpoint"]);
    }

    #[test]
    fn test_missing_first_commit_is_fatal() {
        let mut source = StubSource::new(&[], &[]);
        source.first = None;

        let result = commits_for_version(&source, "not-a-version");
        assert!(result.is_err());
    }
}
