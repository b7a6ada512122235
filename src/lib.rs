pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogDocument, DEFAULT_DESCRIPTION, VersionEntry, load_document, load_document_repairing,
    render_document, render_to_file, repair_json_text, save_document,
};
pub use utils::classify::{ClassifiedCommits, classify_commits};
pub use utils::config::FormatConfig;
pub use utils::git_ops::{CommitRange, CommitSource, GitOps, TagInfo};
pub use utils::testing::TestGitRepo;
pub use utils::update::{
    RangePlan, build_entry, commits_for_version, find_prev_tag, plan_range, update_changelog,
};
pub use utils::version::{Semver, VersionInfo, sort_descending};
