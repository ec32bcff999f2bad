//! List the permitted-file rules

use std::path::Path;

use bumpcheck::adapters::toml::format_rules;
use bumpcheck::output::{OutputMode, RuleInfo, RuleListResult};
use bumpcheck::rules::compile_rules;

use super::load_table;

/// Print the rule table in use
pub fn rules(rules_path: Option<&Path>, as_toml: bool, mode: OutputMode) -> anyhow::Result<()> {
    let table = load_table(rules_path)?;
    // Surface pattern errors here rather than at check time
    compile_rules(&table.rules)?;

    if as_toml {
        print!("{}", format_rules(&table)?);
        return Ok(());
    }

    let result = RuleListResult {
        rules: table
            .rules
            .iter()
            .map(|r| RuleInfo {
                pr_author: r.pr_author.clone(),
                process: r.process.to_string(),
                target_file: r.target_file.clone(),
                title: r.title.clone(),
            })
            .collect(),
    };
    result.render(mode);
    Ok(())
}
