// conventional-commit classification
//
// Add    -> feat, docs
// Change -> fix, revert
// Remove -> remove

use regex::Regex;
use std::sync::LazyLock;

static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(\(([^)]+)\))?:\s*(.+)$").expect("invalid regex")
});

/// commit subjects grouped into changelog buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCommits {
    pub add: Vec<String>,
    pub change: Vec<String>,
    pub remove: Vec<String>,
}

impl ClassifiedCommits {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.change.is_empty() && self.remove.is_empty()
    }
}

fn format_subject(scope: Option<&str>, subject: &str) -> String {
    match scope {
        Some(scope) => format!("({}) {}", scope, subject.trim()),
        None => subject.trim().to_string(),
    }
}

/// sort commit subject lines into Add/Change/Remove buckets
///
/// lines that do not match `type(scope): subject` are dropped, as are
/// matching lines with an unmapped type (chore, refactor, ...); bucket
/// order follows the order subjects were retrieved in
pub fn classify_commits<I, S>(subjects: I) -> ClassifiedCommits
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classified = ClassifiedCommits::default();

    for subject in subjects {
        let Some(captures) = CONVENTIONAL_REGEX.captures(subject.as_ref()) else {
            continue;
        };

        let commit_type = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let scope = captures.get(3).map(|m| m.as_str());
        let description = captures.get(4).map(|m| m.as_str()).unwrap_or_default();

        let formatted = format_subject(scope, description);

        match commit_type.as_str() {
            "feat" | "docs" => classified.add.push(formatted),
            "fix" | "revert" => classified.change.push(formatted),
            "remove" => classified.remove.push(formatted),
            _ => {}
        }
    }

    classified
}
