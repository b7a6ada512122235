use super::types::{CommitRange, TagInfo};
use super::CommitSource;
use crate::error::{Error, Result};
use gix::bstr::ByteSlice;
use std::path::{Path, PathBuf};
use std::process::Command;

/// git access for a single repository
pub struct GitOps {
    repo_path: PathBuf,
}

impl GitOps {
    /// discover the repository containing the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = gix::discover(path)?;

        // working directory for normal repos, git dir for bare ones
        let repo_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            repo.git_dir().to_path_buf()
        };

        Ok(Self { repo_path })
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    fn list_semver_tags(&self) -> Result<Vec<TagInfo>> {
        let repo = gix::discover(&self.repo_path)?;

        let mut tags = Vec::new();

        let references = repo.references().map_err(Error::from_git_error)?;
        for reference_result in references.all().map_err(Error::from_git_error)? {
            if let Ok(reference) = reference_result
                && let Ok(name) = reference.name().as_bstr().to_str()
                && let Some(tag_name) = name.strip_prefix("refs/tags/")
                && let Some(tag) = TagInfo::from_name(tag_name)
            {
                tags.push(tag);
            }
        }

        Ok(tags)
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.first().copied().unwrap_or(""),
                String::from_utf8_lossy(&output.stderr).trim()
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CommitSource for GitOps {
    /// all local tags that parse as semantic versions
    ///
    /// failure to enumerate references degrades to "no tags"
    fn semver_tags(&self) -> Vec<TagInfo> {
        self.list_semver_tags().unwrap_or_default()
    }

    /// one subject line per commit in the range
    ///
    /// a failing `git log` (invalid range, empty repository) degrades to
    /// zero commits instead of aborting the run
    fn subjects_in(&self, range: &CommitRange) -> Vec<String> {
        let spec = range.spec();
        let out = match self.run_git(&["log", &spec, "--pretty=format:%s"]) {
            Ok(out) => out,
            Err(_) => return Vec::new(),
        };

        out.lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }

    /// the repository's first commit, oldest root when history has several
    fn oldest_commit(&self) -> Result<String> {
        let out = self.run_git(&["rev-list", "--max-parents=0", "HEAD"])?;

        out.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .next_back()
            .map(|l| l.to_string())
            .ok_or_else(|| Error::ChangelogError {
                reason: "repository has no commits".to_string(),
            })
    }
}
