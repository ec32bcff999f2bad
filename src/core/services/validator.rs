//! Consistency validator service
//!
//! Cross-checks extracted versions against the PR title, the upgrade
//! oracle, and the shape of the diff. All checks are computed and
//! logged before they are combined.

use regex::Regex;

use super::diff;
use crate::core::models::{
    ChangedFile, CompiledRule, GROUP_DEPENDENCY, GROUP_VERSION, RuleInput, Versions,
};
use crate::core::ports::{RuleLogger, UpgradePolicy};
use crate::error::{Result, RuleError};

/// Outcome of the three dependency checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyChecks {
    /// The title names the dependency and version found in the diff
    pub title_matches: bool,
    /// The new version is a legitimate upgrade of the old one
    pub valid_upgrade: bool,
    /// The diff changes exactly one dependency version
    pub one_dependency_changed: bool,
}

impl DependencyChecks {
    /// All checks passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.title_matches && self.valid_upgrade && self.one_dependency_changed
    }
}

/// Check that the PR title describes the change found in the diff
///
/// The title pattern's `dependency` group must equal the new coordinate
/// (`group:artifact`, case-sensitive) and its `version` group must equal
/// the new version text from the diff. Title patterns consume the `v`
/// before the version, so a revision-stamped version is compared with
/// its own leading `v` removed.
#[must_use]
pub fn title_matches_versions(versions: &Versions, title_pattern: &Regex, title: &str) -> bool {
    let Some(captures) = title_pattern.captures(title) else {
        return false;
    };
    let (Some(dependency), Some(version)) =
        (captures.name(GROUP_DEPENDENCY), captures.name(GROUP_VERSION))
    else {
        return false;
    };

    if dependency.as_str() != versions.new.coordinate.to_string() {
        return false;
    }

    let expected = if versions.new.version.is_revision_stamped() {
        versions.new.text.strip_prefix('v')
    } else {
        Some(versions.new.text.as_str())
    };
    expected == Some(version.as_str())
}

/// Check that a diff alters exactly one dependency version
///
/// Exactly one non-blank line must be removed and exactly one added, and
/// both must carry a `<version>` element. Any other edit, or a second
/// bumped dependency, fails the check.
#[must_use]
pub fn exactly_one_dependency_changed(file: &ChangedFile) -> bool {
    let (removed, added) = diff::changed_lines(file.patch_text());
    match (removed.as_slice(), added.as_slice()) {
        ([old], [new]) => old.contains("<version>") && new.contains("<version>"),
        _ => false,
    }
}

/// Run every dependency check without short-circuiting
///
/// # Errors
///
/// Returns [`RuleError::Delegate`] when the upgrade policy fails.
pub fn run_dependency_checks(
    input: &RuleInput<'_>,
    rule: &CompiledRule,
    versions: &Versions,
    policy: &dyn UpgradePolicy,
) -> Result<DependencyChecks> {
    let title_matches = title_matches_versions(versions, rule.title(), input.title);
    let valid_upgrade = policy.is_valid_upgrade(versions).map_err(RuleError::Delegate)?;
    let one_dependency_changed = exactly_one_dependency_changed(input.file);

    Ok(DependencyChecks {
        title_matches,
        valid_upgrade,
        one_dependency_changed,
    })
}

/// The dependency process: compute, log, and combine the checks
///
/// # Errors
///
/// Returns [`RuleError::Delegate`] when the upgrade policy fails.
pub fn dependency_process(
    input: &RuleInput<'_>,
    rule: &CompiledRule,
    versions: &Versions,
    policy: &dyn UpgradePolicy,
    logger: &dyn RuleLogger,
) -> Result<bool> {
    let checks = run_dependency_checks(input, rule, versions, policy)?;
    let key = input.log_key();

    logger.info(&format!("Versions upgraded correctly for {key}? {}", checks.valid_upgrade));
    logger.info(&format!("One dependency changed for {key}? {}", checks.one_dependency_changed));
    logger.info(&format!("Does dependency match title for {key}? {}", checks.title_matches));

    Ok(checks.passed())
}
