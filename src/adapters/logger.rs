//! `log` facade adapter
//!
//! Implements `RuleLogger` by forwarding to `log::info!`, so messages
//! reach whatever logger the binary installed (`env_logger` for the CLI).

use crate::core::ports::RuleLogger;

/// Forwards rule messages to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

impl RuleLogger for LogLogger {
    fn info(&self, message: &str) {
        log::info!(target: "bumpcheck::rules", "{message}");
    }
}
