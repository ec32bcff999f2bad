//! Language rules
//!
//! A language rule pairs a declarative table of permitted file shapes
//! with `check_pr`, which decides whether one changed file is a safe,
//! verifiable change. Every ecosystem reuses the same
//! extract-then-validate [`BumpPipeline`], parameterized by its patterns
//! and its [`UpgradePolicy`](crate::core::ports::UpgradePolicy).
//!
//! - [`java`] - Maven `pom.xml` dependency bumps

pub mod java;
mod pipeline;

pub use java::{JavaRules, MavenUpgradePolicy};
pub use pipeline::BumpPipeline;

use crate::core::models::{CompiledRule, FileRule, RuleInput};
use crate::core::services::select_rule;
use crate::error::Result;

/// Shared interface of all language rules
pub trait LanguageRule {
    /// The permitted-file table this rule recognizes
    fn permitted_files(&self) -> &[CompiledRule];

    /// Decide whether a file matched by `rule` may be auto-approved
    ///
    /// Assumes `rule` was selected for this input. A diff that does not
    /// match the rule's patterns yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the upgrade oracle.
    fn check_pr(&self, input: &RuleInput<'_>, rule: &CompiledRule) -> Result<bool>;

    /// Find the permitted-file entry for an input, if any
    fn select(&self, input: &RuleInput<'_>) -> Option<&CompiledRule> {
        select_rule(self.permitted_files(), input.file, input.author, input.title)
    }

    /// Select a rule for the input and check it
    ///
    /// Files no rule applies to are not auto-approvable.
    ///
    /// # Errors
    ///
    /// Propagates failures of the upgrade oracle.
    fn evaluate(&self, input: &RuleInput<'_>) -> Result<bool> {
        match self.select(input) {
            Some(rule) => self.check_pr(input, rule),
            None => Ok(false),
        }
    }
}

/// Compile a table of file rules
///
/// # Errors
///
/// Returns the first pattern error found.
pub fn compile_rules(rules: &[FileRule]) -> Result<Vec<CompiledRule>> {
    rules.iter().map(FileRule::compile).collect()
}
