//! Extract-then-validate pipeline shared by every language rule

use super::LanguageRule;
use crate::core::models::{CompiledRule, Process, RuleInput};
use crate::core::ports::{RuleLogger, UpgradePolicy};
use crate::core::services::{dependency_process, extract_versions};
use crate::error::Result;

/// Matcher -> extractor -> validator, parameterized by ecosystem
///
/// Holds no mutable state; one pipeline may evaluate any number of
/// files, from any number of threads.
#[derive(Debug)]
pub struct BumpPipeline<P, L> {
    rules: Vec<CompiledRule>,
    policy: P,
    logger: L,
}

impl<P: UpgradePolicy, L: RuleLogger> BumpPipeline<P, L> {
    /// Build a pipeline over a compiled rule table
    pub const fn new(rules: Vec<CompiledRule>, policy: P, logger: L) -> Self {
        Self {
            rules,
            policy,
            logger,
        }
    }

    /// The ecosystem's upgrade policy
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// The injected logger
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}

impl<P: UpgradePolicy, L: RuleLogger> LanguageRule for BumpPipeline<P, L> {
    fn permitted_files(&self) -> &[CompiledRule] {
        &self.rules
    }

    fn check_pr(&self, input: &RuleInput<'_>, rule: &CompiledRule) -> Result<bool> {
        let Some(versions) = extract_versions(input.file, rule.old_version(), rule.new_version())
        else {
            return Ok(false);
        };
        log::debug!("extracted {versions} for {}", input.log_key());

        match rule.process() {
            Process::Dependency => {
                dependency_process(input, rule, &versions, &self.policy, &self.logger)
            },
        }
    }
}
