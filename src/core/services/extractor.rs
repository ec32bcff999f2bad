//! Version extractor service - reads old/new versions out of a diff
//!
//! The rule's `old_version` and `new_version` patterns locate the change;
//! the captured version text is then parsed by the typed grammar in
//! [`DependencyVersion`]. A diff that does not fit is a normal negative
//! outcome, reported as `None`.

use regex::Regex;

use crate::core::models::{
    ChangedFile, Coordinate, GROUP_ARTIFACT_ID, GROUP_GROUP_ID, GROUP_VERSION, VersionChange,
    Versions,
};

/// Extract the version change described by a file's patch
///
/// # Arguments
///
/// * `file` - The changed file; a missing patch never matches
/// * `old_pattern` - Locates the removed version line
/// * `new_pattern` - Locates the added version line
///
/// # Returns
///
/// `Some(Versions)` when both patterns match and both captured versions
/// parse; `None` otherwise.
#[must_use]
pub fn extract_versions(
    file: &ChangedFile,
    old_pattern: &Regex,
    new_pattern: &Regex,
) -> Option<Versions> {
    let patch = file.patch.as_deref()?;

    let old = capture_change(old_pattern, patch);
    let new = capture_change(new_pattern, patch);

    match (old, new) {
        (Some(old), Some(new)) => Some(Versions { old, new }),
        (old, new) => {
            log::debug!(
                "version extraction failed for {}/{} (old matched: {}, new matched: {})",
                file.sha,
                file.filename,
                old.is_some(),
                new.is_some()
            );
            None
        },
    }
}

fn capture_change(pattern: &Regex, patch: &str) -> Option<VersionChange> {
    let captures = pattern.captures(patch)?;
    let group_id = captures.name(GROUP_GROUP_ID)?.as_str().trim();
    let artifact_id = captures.name(GROUP_ARTIFACT_ID)?.as_str().trim();
    let raw_version = captures.name(GROUP_VERSION)?.as_str().trim();

    match VersionChange::parse(Coordinate::new(group_id, artifact_id), raw_version) {
        Ok(change) => Some(change),
        Err(err) => {
            log::debug!("unparseable version `{raw_version}`: {err}");
            None
        },
    }
}
