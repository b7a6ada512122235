use anyhow::{Context, Result};
use changelogger::utils::cli::parse_or_exit;
use changelogger::{GitOps, update_changelog};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changelog-update")]
#[command(version, about = "derive a changelog entry for a version from the git log", long_about = None)]
struct Cli {
    /// target version (ex: 1.2.0)
    #[arg(id = "target-version", value_name = "version")]
    version: String,

    /// path to the changelog json file
    #[arg(value_name = "json-path")]
    json_path: PathBuf,
}

fn main() -> Result<()> {
    let cli: Cli = parse_or_exit();

    // the repository is whatever the process was started in
    let git = GitOps::discover(".").context("failed to open git repository")?;

    let doc = update_changelog(&git, &cli.version, &cli.json_path)
        .context("failed to update changelog")?;

    if let Some(entry) = doc.find_entry(&cli.version) {
        println!(
            "updated {} for v{}: {} added, {} changed, {} removed",
            cli.json_path.display(),
            entry.version,
            entry.add.len(),
            entry.change.len(),
            entry.remove.len()
        );
    }

    Ok(())
}
