use anyhow::{Context, Result};
use changelogger::render_to_file;
use changelogger::utils::cli::parse_or_exit;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changelog-render")]
#[command(version, about = "render a json changelog into markdown", long_about = None)]
struct Cli {
    /// path to the changelog json file
    #[arg(value_name = "json-path")]
    json_path: PathBuf,

    /// output markdown path
    #[arg(value_name = "md-path", default_value = "CHANGELOG.md")]
    md_path: PathBuf,
}

fn main() -> Result<()> {
    let cli: Cli = parse_or_exit();

    let rendered = render_to_file(&cli.json_path, &cli.md_path)
        .context("failed to render changelog")?;

    println!(
        "wrote {} ({} lines)",
        cli.md_path.display(),
        rendered.lines().count()
    );

    Ok(())
}
