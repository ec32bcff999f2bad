//! Rule process kinds
//!
//! Selects which consistency checks a matched file goes through.

use serde::{Deserialize, Serialize};

/// Which checks apply to a matched file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// A single dependency version bump
    #[default]
    Dependency,
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dependency => write!(f, "dependency"),
        }
    }
}
