// semver utilities
//
// two parsers on purpose: the lenient one never fails and is used for
// ordering entries already stored in the changelog, the strict one gates
// which git tags and target versions count as semantic at all.

use crate::utils::changelog::VersionEntry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

static STRICT_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").expect("invalid regex"));

/// lenient semver triple, missing or unparseable segments default to 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Semver {
    /// parse a version string without ever failing
    ///
    /// strips a leading "v", splits on ".", coerces each of the first
    /// three segments to an integer (0 when absent or not a number)
    pub fn parse_lenient(version: &str) -> Self {
        let clean = version.strip_prefix('v').unwrap_or(version);
        let mut parts = clean.split('.');

        let mut next_segment = || {
            parts
                .next()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(0)
        };

        Self {
            major: next_segment(),
            minor: next_segment(),
            patch: next_segment(),
        }
    }
}

impl Ord for Semver {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for Semver {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// strictly parsed version with its normalized "M.m.p" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub normalized: String,
}

impl VersionInfo {
    /// parse against `^v?\d+\.\d+(\.\d+)?$`, patch defaults to 0
    ///
    /// returns None for anything that is not a plain semantic version
    /// (pre-release suffixes, build metadata, single numbers, ...)
    pub fn parse_strict(version: &str) -> Option<Self> {
        let clean = version.strip_prefix('v').unwrap_or(version);
        let captures = STRICT_VERSION_REGEX.captures(clean)?;

        let major: u64 = captures.get(1)?.as_str().parse().ok()?;
        let minor: u64 = captures.get(2)?.as_str().parse().ok()?;
        let patch: u64 = match captures.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };

        Some(Self {
            major,
            minor,
            patch,
            normalized: format!("{}.{}.{}", major, minor, patch),
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

/// stable sort of version entries, newest first
///
/// entries whose version strings normalize to the same triple keep their
/// relative order
pub fn sort_descending(entries: &mut [VersionEntry]) {
    entries.sort_by(|a, b| {
        let va = Semver::parse_lenient(&a.version);
        let vb = Semver::parse_lenient(&b.version);
        vb.cmp(&va)
    });
}
