//! Business logic services
//!
//! Pure pipeline stages that operate on data passed in and return
//! results. Only the injected ports can fail or have effects.
//!
//! - [`matcher`] - Select the permitted-file rule for a changed file
//! - [`extractor`] - Read old/new versions out of a diff
//! - [`validator`] - Cross-check extracted versions
//! - [`diff`] - Unified diff line classification

pub mod diff;
pub mod extractor;
pub mod matcher;
pub mod validator;

pub use extractor::extract_versions;
pub use matcher::{rule_applies, select_rule};
pub use validator::{
    DependencyChecks, dependency_process, exactly_one_dependency_changed, run_dependency_checks,
    title_matches_versions,
};
