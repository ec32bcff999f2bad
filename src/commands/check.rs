//! Check one changed file of a pull request

use std::fs;
use std::path::Path;

use anyhow::Context;
use bumpcheck::adapters::LogLogger;
use bumpcheck::core::models::{ChangedFile, RuleInput};
use bumpcheck::core::services::extract_versions;
use bumpcheck::output::{CheckReport, OutputMode, VersionsInfo};
use bumpcheck::rules::{JavaRules, LanguageRule};

use super::load_table;

/// Evaluate a changed file and render the report
///
/// Returns whether the file may be auto-approved.
pub fn check(
    file_path: &Path,
    author: &str,
    title: &str,
    rules_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let file: ChangedFile = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a changed-file JSON object", file_path.display()))?;

    let table = load_table(rules_path)?;
    let rules = JavaRules::with_rules(&table.rules, table.policy.maven_policy(), LogLogger)?;

    let input = RuleInput::new(&file, author, title);
    let selected = rules.select(&input);

    let (approved, versions) = match selected {
        Some(rule) => {
            let approved = rules.check_pr(&input, rule)?;
            let versions = extract_versions(&file, rule.old_version(), rule.new_version());
            (approved, versions)
        },
        None => (false, None),
    };

    let report = CheckReport {
        approved,
        file: file.filename.clone(),
        author: author.to_string(),
        rule: selected.map(|r| r.rule().target_file.clone()),
        versions: versions.map(|v| VersionsInfo {
            old_dependency: v.old.coordinate.to_string(),
            old_version: v.old.text,
            new_dependency: v.new.coordinate.to_string(),
            new_version: v.new.text,
        }),
    };
    report.render(mode);

    Ok(approved)
}
