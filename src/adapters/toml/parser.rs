//! TOML parser for rule table files
//!
//! Handles reading and deserializing `bumpcheck.toml` rule tables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::FileRule;
use crate::error::{Result, RuleError};
use crate::rules::MavenUpgradePolicy;

/// A rule table file
///
/// ```toml
/// [policy]
/// allow_major_bumps = false
///
/// [[rule]]
/// pr_author = "renovate-bot"
/// process = "dependency"
/// target_file = "**/pom.xml"
/// title = '^chore\(deps\): update dependency (?P<dependency>\S*) to v(?P<version>\S*)$'
/// old_version = '...'
/// new_version = '...'
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RulesFile {
    /// Upgrade policy settings
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Permitted file shapes
    #[serde(default, rename = "rule")]
    pub rules: Vec<FileRule>,
}

/// Policy settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Accept bumps that change the major version
    pub allow_major_bumps: bool,
}

impl PolicyConfig {
    /// The Maven policy these settings describe
    #[must_use]
    pub fn maven_policy(self) -> MavenUpgradePolicy {
        if self.allow_major_bumps {
            MavenUpgradePolicy::allowing_major_bumps()
        } else {
            MavenUpgradePolicy::default()
        }
    }
}

/// Parse a rule table from TOML text
///
/// # Errors
///
/// Returns [`RuleError::Config`] if the text is not a valid rule table.
pub fn parse_rules(content: &str, origin: &str) -> Result<RulesFile> {
    toml::from_str(content).map_err(|e| RuleError::Config {
        path: origin.to_string(),
        reason: e.to_string(),
    })
}

/// Load a rule table from a file
///
/// # Errors
///
/// Returns [`RuleError::Config`] if the file cannot be read or parsed.
pub fn load_rules(path: &Path) -> Result<RulesFile> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| RuleError::Config {
        path: origin.clone(),
        reason: e.to_string(),
    })?;
    parse_rules(&content, &origin)
}

/// Render a rule table as TOML
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_rules(file: &RulesFile) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(file)?)
}
