//! Java (Maven) dependency-bump rule
//!
//! Recognizes renovate-bot pull requests that bump one `<version>` in a
//! `pom.xml`, for both plain (`1.4.2`) and revision-stamped
//! (`v1-rev20210319-1.32.1`) versions.

use std::cmp::Ordering;

use super::{BumpPipeline, LanguageRule, compile_rules};
use crate::core::models::{CompiledRule, DependencyVersion, FileRule, Process, RuleInput, Versions};
use crate::core::ports::{RuleLogger, UpgradePolicy};
use crate::error::Result;

/// Either version shape, as it may appear inside `<version>`
const VERSION: &str = r"v[0-9]+-rev[0-9]+-[0-9]+\.[0-9]+\.[0-9]+|[0-9]+\.[0-9]+\.[0-9]+";

/// Matches e.g.
/// `chore(deps): update dependency com.google.cloud:google-cloud-datacatalog to v1.4.2`
/// or `... com.google.apis:google-api-services-policytroubleshooter to v1-rev20210319-1.32.1`
const TITLE: &str =
    r"^(fix|chore)\(deps\): update dependency (?P<dependency>@?\S*) to v(?P<version>\S*)$";

/// Coordinate followed by the removed `<version>` line
fn old_version_pattern() -> String {
    format!(
        r"<groupId>(?P<group>[^<]*)</groupId>\s*<artifactId>(?P<artifact>[^<]*)</artifactId>[ \t]*\r?\n-\s*<version>(?P<version>{VERSION})</version>"
    )
}

/// Coordinate, removed `<version>` line, then the added `<version>` line
fn new_version_pattern() -> String {
    format!(
        r"<groupId>(?P<group>[^<]*)</groupId>\s*<artifactId>(?P<artifact>[^<]*)</artifactId>[ \t]*\r?\n-\s*<version>(?:{VERSION})</version>[ \t]*\r?\n\+\s*<version>(?P<version>{VERSION})</version>"
    )
}

/// The built-in permitted-file table for Maven projects
#[must_use]
pub fn permitted_files() -> Vec<FileRule> {
    vec![FileRule {
        pr_author: "renovate-bot".to_string(),
        process: Process::Dependency,
        target_file: "**/pom.xml".to_string(),
        title: TITLE.to_string(),
        old_version: old_version_pattern(),
        new_version: new_version_pattern(),
    }]
}

/// Version ordering for Maven artifacts
///
/// An upgrade is valid when the coordinate is unchanged, both versions
/// have the same shape, the new version is strictly greater, and the
/// major version does not move. Revision-stamped versions additionally
/// keep their API generation, and neither the revision date nor the
/// release may regress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MavenUpgradePolicy {
    allow_major: bool,
}

impl MavenUpgradePolicy {
    /// A policy that also accepts major version bumps
    #[must_use]
    pub const fn allowing_major_bumps() -> Self {
        Self { allow_major: true }
    }

    /// Whether major bumps are accepted
    #[must_use]
    pub const fn allows_major_bumps(&self) -> bool {
        self.allow_major
    }

    fn check(&self, old: &DependencyVersion, new: &DependencyVersion) -> bool {
        if new.compare(old) != Some(Ordering::Greater) {
            return false;
        }

        if !self.allow_major && old.release().major != new.release().major {
            return false;
        }

        match (old, new) {
            (
                DependencyVersion::RevisionStamped {
                    api: old_api,
                    revision: old_rev,
                    release: old_rel,
                },
                DependencyVersion::RevisionStamped {
                    api: new_api,
                    revision: new_rev,
                    release: new_rel,
                },
            ) => old_api == new_api && new_rev >= old_rev && new_rel >= old_rel,
            _ => true,
        }
    }
}

impl UpgradePolicy for MavenUpgradePolicy {
    fn is_valid_upgrade(&self, versions: &Versions) -> anyhow::Result<bool> {
        if !versions.same_coordinate() {
            return Ok(false);
        }
        Ok(self.check(&versions.old.version, &versions.new.version))
    }
}

/// The Maven language rule
#[derive(Debug)]
pub struct JavaRules<L> {
    pipeline: BumpPipeline<MavenUpgradePolicy, L>,
}

impl<L: RuleLogger> JavaRules<L> {
    /// The built-in table with the default policy
    ///
    /// # Errors
    ///
    /// Fails only if the built-in patterns do not compile.
    pub fn new(logger: L) -> Result<Self> {
        Self::with_rules(&permitted_files(), MavenUpgradePolicy::default(), logger)
    }

    /// A custom table and policy
    ///
    /// # Errors
    ///
    /// Returns the first pattern error in `rules`.
    pub fn with_rules(rules: &[FileRule], policy: MavenUpgradePolicy, logger: L) -> Result<Self> {
        Ok(Self {
            pipeline: BumpPipeline::new(compile_rules(rules)?, policy, logger),
        })
    }

    /// The upgrade policy in use
    pub const fn policy(&self) -> &MavenUpgradePolicy {
        self.pipeline.policy()
    }

    /// The injected logger
    pub const fn logger(&self) -> &L {
        self.pipeline.logger()
    }
}

impl<L: RuleLogger> LanguageRule for JavaRules<L> {
    fn permitted_files(&self) -> &[CompiledRule] {
        self.pipeline.permitted_files()
    }

    fn check_pr(&self, input: &RuleInput<'_>, rule: &CompiledRule) -> Result<bool> {
        self.pipeline.check_pr(input, rule)
    }
}
