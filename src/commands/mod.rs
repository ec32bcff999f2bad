//! Command implementations

mod check;
mod rules;

pub use check::check;
pub use rules::rules;

use std::path::Path;

use bumpcheck::adapters::toml::{PolicyConfig, RulesFile, load_rules};
use bumpcheck::rules::java;

/// Load the rule table from `path`, or fall back to the built-in Maven table
fn load_table(path: Option<&Path>) -> anyhow::Result<RulesFile> {
    match path {
        Some(path) => Ok(load_rules(path)?),
        None => Ok(RulesFile {
            policy: PolicyConfig::default(),
            rules: java::permitted_files(),
        }),
    }
}
