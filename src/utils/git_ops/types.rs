use crate::utils::version::{Semver, VersionInfo};
use serde::{Deserialize, Serialize};

/// a git tag that parsed as a semantic version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// raw tag name, "v" prefix and all
    pub name: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// normalized "M.m.p" form
    pub normalized: String,
}

impl TagInfo {
    /// build from a raw tag name, None when the tag is not semantic
    pub fn from_name(name: &str) -> Option<Self> {
        let info = VersionInfo::parse_strict(name)?;
        Some(Self {
            name: name.to_string(),
            major: info.major,
            minor: info.minor,
            patch: info.patch,
            normalized: info.normalized,
        })
    }

    pub fn triple(&self) -> Semver {
        Semver {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
        }
    }
}

/// a resolved set of commits to inspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// every commit reachable from the ref
    Reachable(String),
    /// commits in `from..to` (excluding `from`, including `to`)
    Between { from: String, to: String },
}

impl CommitRange {
    /// the revision argument handed to `git log`
    pub fn spec(&self) -> String {
        match self {
            CommitRange::Reachable(r) => r.clone(),
            CommitRange::Between { from, to } => format!("{}..{}", from, to),
        }
    }
}
