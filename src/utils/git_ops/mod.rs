// git access module

pub mod repository;
pub mod types;

pub use repository::GitOps;
pub use types::{CommitRange, TagInfo};

use crate::error::Result;

/// the git capabilities the updater needs, kept behind a trait so range
/// resolution and classification can be exercised without a repository
pub trait CommitSource {
    /// local tags matching the strict semver pattern
    fn semver_tags(&self) -> Vec<TagInfo>;

    /// commit subject lines for a resolved range
    fn subjects_in(&self, range: &CommitRange) -> Vec<String>;

    /// the first commit of the repository
    fn oldest_commit(&self) -> Result<String>;
}
