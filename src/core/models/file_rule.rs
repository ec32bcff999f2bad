//! File rule model
//!
//! A `FileRule` is the declarative description of one recognized
//! file-change shape. It is plain data (loadable from TOML) and is
//! compiled once into a [`CompiledRule`] before evaluation.

use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Process;
use crate::error::{Result, RuleError};

/// Named group carrying the dependency name in a title pattern
pub const GROUP_DEPENDENCY: &str = "dependency";
/// Named group carrying a version string
pub const GROUP_VERSION: &str = "version";
/// Named group carrying the dependency group id
pub const GROUP_GROUP_ID: &str = "group";
/// Named group carrying the dependency artifact id
pub const GROUP_ARTIFACT_ID: &str = "artifact";

/// A permitted file shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRule {
    /// Exact login of the bot allowed to author the change
    pub pr_author: String,

    /// Which consistency checks apply
    #[serde(default)]
    pub process: Process,

    /// Glob matched against the changed file's path (e.g., "**/pom.xml")
    pub target_file: String,

    /// Regex matched against the PR title
    pub title: String,

    /// Regex locating the removed version line in the patch
    pub old_version: String,

    /// Regex locating the added version line in the patch
    pub new_version: String,
}

impl FileRule {
    /// Compile all patterns of this rule
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] when a glob or regex does not
    /// compile, and [`RuleError::MissingGroup`] when a regex lacks a named
    /// group the evaluator reads.
    pub fn compile(&self) -> Result<CompiledRule> {
        let target_file = Pattern::new(&self.target_file).map_err(|e| RuleError::InvalidPattern {
            field: "target_file",
            pattern: self.target_file.clone(),
            reason: e.to_string(),
        })?;

        let title = compile_regex("title", &self.title, &[GROUP_DEPENDENCY, GROUP_VERSION])?;
        let old_version = compile_regex(
            "old_version",
            &self.old_version,
            &[GROUP_GROUP_ID, GROUP_ARTIFACT_ID, GROUP_VERSION],
        )?;
        let new_version = compile_regex(
            "new_version",
            &self.new_version,
            &[GROUP_GROUP_ID, GROUP_ARTIFACT_ID, GROUP_VERSION],
        )?;

        Ok(CompiledRule {
            source: self.clone(),
            target_file,
            title,
            old_version,
            new_version,
        })
    }
}

fn compile_regex(field: &'static str, pattern: &str, groups: &[&'static str]) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    for group in groups {
        if !regex.capture_names().flatten().any(|name| name == *group) {
            return Err(RuleError::MissingGroup { field, group });
        }
    }

    Ok(regex)
}

/// A `FileRule` with its patterns compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    source: FileRule,
    target_file: Pattern,
    title: Regex,
    old_version: Regex,
    new_version: Regex,
}

impl CompiledRule {
    /// The declarative rule this was compiled from
    #[must_use]
    pub const fn rule(&self) -> &FileRule {
        &self.source
    }

    /// Expected PR author
    #[must_use]
    pub fn pr_author(&self) -> &str {
        &self.source.pr_author
    }

    /// Selected process
    #[must_use]
    pub const fn process(&self) -> Process {
        self.source.process
    }

    /// Title pattern
    #[must_use]
    pub const fn title(&self) -> &Regex {
        &self.title
    }

    /// Removed-line version pattern
    #[must_use]
    pub const fn old_version(&self) -> &Regex {
        &self.old_version
    }

    /// Added-line version pattern
    #[must_use]
    pub const fn new_version(&self) -> &Regex {
        &self.new_version
    }

    /// Whether the target glob matches a repository-relative path
    #[must_use]
    pub fn matches_file(&self, filename: &str) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.target_file.matches_with(filename, options)
    }

    /// Whether the title pattern matches a PR title
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.is_match(title)
    }
}
