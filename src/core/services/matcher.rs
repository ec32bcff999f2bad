//! Rule matcher service - selects the permitted-file rule for a change
//!
//! This module contains pure matching logic with no I/O dependencies.

use crate::core::models::{ChangedFile, CompiledRule};

/// Check if a rule applies to a changed file
///
/// A rule applies when all of the following hold:
/// - the PR author equals `pr_author` exactly
/// - the target glob matches the file's path
/// - the title pattern matches the PR title
#[must_use]
pub fn rule_applies(rule: &CompiledRule, file: &ChangedFile, author: &str, title: &str) -> bool {
    rule.pr_author() == author && rule.matches_file(&file.filename) && rule.matches_title(title)
}

/// Select the first rule that applies to a changed file
///
/// Returns `None` when no rule matches; the file is then not
/// auto-approvable by any rule in the table.
#[must_use]
pub fn select_rule<'a>(
    rules: &'a [CompiledRule],
    file: &ChangedFile,
    author: &str,
    title: &str,
) -> Option<&'a CompiledRule> {
    let selected = rules.iter().find(|rule| rule_applies(rule, file, author, title));
    if selected.is_none() {
        log::debug!("no permitted-file rule for {}", file.log_key(author));
    }
    selected
}
