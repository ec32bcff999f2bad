//! Error types for rule configuration and evaluation
//!
//! A file that simply does not look like a dependency bump is not an
//! error; it evaluates to `false`. Errors are reserved for broken
//! configuration and for failures inside the upgrade oracle.

use thiserror::Error;

/// Errors raised while compiling or evaluating a rule
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule pattern failed to compile
    #[error("invalid {field} pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// Which rule field holds the pattern
        field: &'static str,
        /// The offending pattern text
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// A rule regex lacks a named capture group the evaluator reads
    #[error("{field} pattern is missing the named group `{group}`")]
    MissingGroup {
        /// Which rule field holds the pattern
        field: &'static str,
        /// The required group name
        group: &'static str,
    },

    /// The rule table could not be read or parsed
    #[error("failed to load rules from {path}: {reason}")]
    Config {
        /// Path of the rule file
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// The upgrade oracle failed
    #[error("upgrade check failed: {0}")]
    Delegate(#[source] anyhow::Error),
}

/// Result alias for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;
