//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of evaluating one changed file
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the file may be auto-approved
    pub approved: bool,
    /// Path of the evaluated file
    pub file: String,
    /// PR author
    pub author: String,
    /// Target glob of the rule that applied, if any
    pub rule: Option<String>,
    /// Extracted old/new versions, if the diff matched
    pub versions: Option<VersionsInfo>,
}

/// Extracted versions in display form
#[derive(Debug, Serialize)]
pub struct VersionsInfo {
    /// `group:artifact` read from the removed line
    pub old_dependency: String,
    /// Version read from the removed line
    pub old_version: String,
    /// `group:artifact` read from the added line
    pub new_dependency: String,
    /// Version read from the added line
    pub new_version: String,
}

/// Result of a rules list operation
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Permitted file shapes
    pub rules: Vec<RuleInfo>,
}

/// Information about a permitted file shape
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Expected PR author
    pub pr_author: String,
    /// Process tag
    pub process: String,
    /// Target glob
    pub target_file: String,
    /// Title pattern
    pub title: String,
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let Some(rule) = &self.rule else {
            println!("No permitted-file rule applies to {} by {}.", self.file, self.author);
            println!("NOT APPROVED");
            return;
        };

        println!("Checking {} against rule {}...\n", self.file, rule);

        match &self.versions {
            Some(v) if v.old_dependency == v.new_dependency => {
                println!("  {} {} -> {}", v.new_dependency, v.old_version, v.new_version);
            },
            Some(v) => {
                println!(
                    "  {} {} -> {} {}",
                    v.old_dependency, v.old_version, v.new_dependency, v.new_version
                );
            },
            None => println!("  No recognizable version change in diff."),
        }

        println!();
        if self.approved {
            println!("APPROVED: verified dependency bump");
        } else {
            println!("NOT APPROVED");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules configured.");
            return;
        }

        println!("Permitted files:\n");
        for r in &self.rules {
            println!("  [{}] {}", r.process.to_uppercase(), r.target_file);
            println!("  Author: {}", r.pr_author);
            println!("  Title:  {}\n", r.title);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
