//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use bumpcheck::core::models::{ChangedFile, DependencyVersion, VersionParseError};
use bumpcheck::core::services::exactly_one_dependency_changed;
use test_case::test_case;

// =============================================================================
// Version Grammar Tests
// =============================================================================

#[test_case("1.4.2", false ; "plain")]
#[test_case("0.0.0", false ; "plain zeros")]
#[test_case("10.200.3000", false ; "plain wide")]
#[test_case("v1-rev20210319-1.31.5", true ; "revision stamped")]
#[test_case("v3-rev20240229-2.0.0", true ; "revision stamped leap day")]
fn test_version_parses(input: &str, revision_stamped: bool) {
    let version: DependencyVersion = input.parse().unwrap();
    assert_eq!(version.is_revision_stamped(), revision_stamped);
    assert_eq!(version.to_string(), input);
}

#[test_case("" ; "empty")]
#[test_case("1.4" ; "two components")]
#[test_case("1.4.2.1" ; "four components")]
#[test_case("1.4.x" ; "non numeric")]
#[test_case("1.4.2-SNAPSHOT" ; "qualifier")]
#[test_case("v1-rev20230229-1.0.0" ; "not a leap year")]
#[test_case("v1-rev20210319" ; "no release")]
#[test_case("va-rev20210319-1.0.0" ; "non numeric api")]
#[test_case("${project.version}" ; "property reference")]
#[test_case("1.04.2" ; "zero padded component")]
#[test_case("v01-rev20210319-1.0.0" ; "zero padded api")]
fn test_version_rejected(input: &str) {
    assert!(input.parse::<DependencyVersion>().is_err());
}

#[test]
fn test_rejection_names_component() {
    assert_eq!(
        "v1-rev2021031-1.0.0".parse::<DependencyVersion>(),
        Err(VersionParseError::InvalidDate("2021031".to_string()))
    );
}

// =============================================================================
// One-Dependency Tests
// =============================================================================

#[test_case("@@ -1 +1 @@\n-<version>1.0.0</version>\n+<version>1.0.1</version>", true ; "single version line")]
#[test_case("@@ -1,2 +1,2 @@\n-<version>1.0.0</version>\n-<version>2.0.0</version>\n+<version>1.0.1</version>\n+<version>2.0.1</version>", false ; "two version lines")]
#[test_case("@@ -1,2 +1,1 @@\n-<version>1.0.0</version>\n-<scope>test</scope>\n+<version>1.0.1</version>", false ; "extra removal")]
#[test_case("@@ -1 +1,2 @@\n-<version>1.0.0</version>\n+<version>1.0.1</version>\n+<scope>test</scope>", false ; "extra addition")]
#[test_case("@@ -1 +1 @@\n-<name>a</name>\n+<name>b</name>", false ; "no version element")]
#[test_case("@@ -1 +1,2 @@\n-<version>1.0.0</version>\n+<version>1.0.1</version>\n+", true ; "blank addition ignored")]
#[test_case("", false ; "empty patch")]
fn test_one_dependency_changed(patch: &str, expected: bool) {
    let file = ChangedFile::new("pom.xml", "sha", patch);
    assert_eq!(exactly_one_dependency_changed(&file), expected);
}
