//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `logger` - `RuleLogger` backed by the `log` facade
//! - `toml/` - Rule table file parsing

pub mod logger;
pub mod toml;

pub use logger::LogLogger;
