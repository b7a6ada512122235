pub mod changelog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod git_ops;
pub mod update;
pub mod version;

pub mod testing;
