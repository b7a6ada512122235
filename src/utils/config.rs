use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".changelogger.toml";

fn default_indent_width() -> usize {
    2
}

fn default_final_newline() -> bool {
    true
}

/// project-level formatting configuration
///
/// written files pass through these settings, so a project can pin its own
/// indentation without the tool growing command-line flags for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// spaces per indentation level in emitted json
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// end written files with a newline
    #[serde(default = "default_final_newline")]
    pub final_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            final_newline: default_final_newline(),
        }
    }
}

impl FormatConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FormatConfig = toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// resolve the configuration applying to a target file
    ///
    /// walks up from the target's directory looking for `.changelogger.toml`,
    /// the way formatters resolve their project config; falls back to
    /// defaults when nothing is found or the file cannot be parsed
    pub fn resolve_for_path<P: AsRef<Path>>(target: P) -> Self {
        match Self::find_config_file(target) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// find the nearest config file above the target path
    pub fn find_config_file<P: AsRef<Path>>(target: P) -> Option<PathBuf> {
        let target = target.as_ref();
        let start = if target.is_dir() {
            target
        } else {
            target.parent()?
        };

        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = current.parent();
        }

        None
    }

    /// apply line-level formatting rules to rendered text
    pub fn apply_to_text(&self, text: &str) -> String {
        let mut formatted: String = text
            .lines()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n");

        if self.final_newline {
            formatted.push('\n');
        }

        formatted
    }
}
