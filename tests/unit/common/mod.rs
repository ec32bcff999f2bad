//! Shared test fixtures and helpers
//!
//! Builders for pull request patches and titles in the shape
//! renovate-bot produces for Maven projects.

use std::sync::Mutex;

use bumpcheck::core::models::ChangedFile;
use bumpcheck::core::ports::RuleLogger;
use bumpcheck::rules::JavaRules;

pub const AUTHOR: &str = "renovate-bot";
pub const DATACATALOG: (&str, &str) = ("com.google.cloud", "google-cloud-datacatalog");
pub const TROUBLESHOOTER: (&str, &str) =
    ("com.google.apis", "google-api-services-policytroubleshooter");

/// One `<dependency>` block whose version changes from `old` to `new`
pub fn dependency_hunk(
    start: usize,
    (group, artifact): (&str, &str),
    old: &str,
    new: &str,
) -> String {
    format!(
        "@@ -{start},7 +{start},7 @@\n     <dependency>\n       <groupId>{group}</groupId>\n       <artifactId>{artifact}</artifactId>\n-      <version>{old}</version>\n+      <version>{new}</version>\n     </dependency>"
    )
}

/// A pom.xml changed file carrying the given patch
pub fn pom(patch: impl Into<String>) -> ChangedFile {
    ChangedFile::new("pom.xml", "bbcd538c8e72b8c175046e27cc8f907076331401", patch)
}

/// A pom.xml bumping a single dependency
pub fn single_bump(coordinate: (&str, &str), old: &str, new: &str) -> ChangedFile {
    pom(dependency_hunk(30, coordinate, old, new))
}

/// Renovate's PR title for a dependency bump
pub fn title((group, artifact): (&str, &str), version: &str) -> String {
    let version = version.strip_prefix('v').unwrap_or(version);
    format!("chore(deps): update dependency {group}:{artifact} to v{version}")
}

/// Records rule messages in order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl RuleLogger for MemoryLogger {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Built-in Java rules recording their log lines
pub fn java_rules() -> JavaRules<MemoryLogger> {
    JavaRules::new(MemoryLogger::new()).unwrap()
}
