//! Changed file model
//!
//! One file touched by a pull request, in the shape GitHub's
//! "list pull request files" endpoint returns it.

use serde::{Deserialize, Serialize};

/// A file changed by a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path (e.g., "java-datacatalog/pom.xml")
    pub filename: String,

    /// Blob SHA, used only to correlate log lines
    #[serde(default)]
    pub sha: String,

    /// Unified diff of the file. Absent for binary or oversized files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl ChangedFile {
    /// Create a changed file with a patch
    pub fn new(
        filename: impl Into<String>,
        sha: impl Into<String>,
        patch: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            sha: sha.into(),
            patch: Some(patch.into()),
        }
    }

    /// Create a changed file that carries no patch
    pub fn without_patch(filename: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            sha: sha.into(),
            patch: None,
        }
    }

    /// The patch text, or an empty string when absent
    #[must_use]
    pub fn patch_text(&self) -> &str {
        self.patch.as_deref().unwrap_or("")
    }

    /// `sha/filename/author` key used in every evaluation log line
    #[must_use]
    pub fn log_key(&self, author: &str) -> String {
        format!("{}/{}/{}", self.sha, self.filename, author)
    }
}
