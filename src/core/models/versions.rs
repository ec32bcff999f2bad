//! Extracted version facts
//!
//! What the extractor read out of a diff: the dependency coordinate and
//! version on the removed line, and the same on the added line.

use std::fmt;

use super::{DependencyVersion, VersionParseError};

/// A Maven dependency coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// `<groupId>`
    pub group_id: String,
    /// `<artifactId>`
    pub artifact_id: String,
}

impl Coordinate {
    /// Create a coordinate
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A coordinate pinned at a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Which dependency
    pub coordinate: Coordinate,
    /// At which version, as parsed for ordering
    pub version: DependencyVersion,
    /// The version exactly as written in the diff
    pub text: String,
}

impl VersionChange {
    /// Parse `text` and pin `coordinate` at it
    ///
    /// # Errors
    ///
    /// Returns the grammar error when `text` is not a recognized version.
    pub fn parse(coordinate: Coordinate, text: &str) -> Result<Self, VersionParseError> {
        Ok(Self {
            coordinate,
            version: text.parse()?,
            text: text.to_string(),
        })
    }
}

/// Before/after facts for one changed dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    /// Read from the removed line
    pub old: VersionChange,
    /// Read from the added line
    pub new: VersionChange,
}

impl Versions {
    /// Whether old and new refer to the same dependency
    #[must_use]
    pub fn same_coordinate(&self) -> bool {
        self.old.coordinate == self.new.coordinate
    }
}

impl fmt::Display for Versions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.same_coordinate() {
            write!(f, "{} {} -> {}", self.old.coordinate, self.old.text, self.new.text)
        } else {
            write!(
                f,
                "{} {} -> {} {}",
                self.old.coordinate, self.old.text, self.new.coordinate, self.new.text
            )
        }
    }
}
