//! Rule logger port
//!
//! Evaluation results are reported to an injected observer instead of a
//! global logger, so callers decide where diagnostics go.

/// Fire-and-forget sink for informational evaluation messages
#[cfg_attr(test, mockall::automock)]
pub trait RuleLogger: Send + Sync {
    /// Record an informational message
    fn info(&self, message: &str);
}
