//! TOML-based rule tables
//!
//! - [`parser`] - Read, deserialize and render rule table files

pub mod parser;

pub use parser::{PolicyConfig, RulesFile, format_rules, load_rules, parse_rules};
