// fixtures for building throwaway repositories in tests

pub mod git_utils;

pub use git_utils::TestGitRepo;
