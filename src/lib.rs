//! bumpcheck - Auto-approval rules for bot-authored dependency bump pull requests
//!
//! A language rule decides whether one changed file is a safe,
//! mechanically verifiable dependency version bump: its diff is parsed
//! into old/new versions, which are then cross-checked against the PR
//! title, the ecosystem's upgrade ordering, and the shape of the diff.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]
// Generated mocks are test-only
#![cfg_attr(test, allow(missing_docs))]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod output;
pub mod rules;

pub use error::{Result, RuleError};
