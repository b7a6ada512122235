use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Test git repository utilities for controlled testing
pub struct TestGitRepo {
    repo_path: PathBuf,
}

impl TestGitRepo {
    /// Initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Self {
            repo_path: path.to_path_buf(),
        };

        repo.run(&["init"])?;

        // Configure user for commits
        repo.run(&["config", "user.name", "Test User"])?;
        repo.run(&["config", "user.email", "test@example.com"])?;

        // Disable GPG signing for tests
        repo.run(&["config", "commit.gpgsign", "false"])?;
        repo.run(&["config", "tag.gpgsign", "false"])?;

        Ok(repo)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Write a file and commit it with the given message
    pub fn commit_file(&self, file_path: &str, content: &str, message: &str) -> Result<()> {
        let full_path = self.repo_path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        std::fs::write(full_path, content).map_err(Error::IoError)?;

        self.run(&["add", "."])?;
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    /// Create an empty commit carrying only the message
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "--allow-empty", "-m", message])?;
        Ok(())
    }

    /// Create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name])?;
        Ok(())
    }

    /// Get current HEAD commit ID
    pub fn head_commit_id(&self) -> Result<String> {
        self.run(&["rev-parse", "HEAD"])
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }
}
