//! Domain models for bumpcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChangedFile`] - One file touched by a pull request
//! - [`FileRule`] - "Files shaped like this may be auto-approved"
//! - [`DependencyVersion`] - A plain or revision-stamped version
//! - [`Versions`] - Old/new facts extracted from a diff
//! - [`RuleInput`] - A changed file with its PR author and title

mod changed_file;
mod file_rule;
mod input;
mod process;
mod version;
mod versions;

pub use changed_file::ChangedFile;
pub use file_rule::{
    CompiledRule, FileRule, GROUP_ARTIFACT_ID, GROUP_DEPENDENCY, GROUP_GROUP_ID, GROUP_VERSION,
};
pub use input::RuleInput;
pub use process::Process;
pub use version::{DependencyVersion, VersionParseError};
pub use versions::{Coordinate, VersionChange, Versions};
