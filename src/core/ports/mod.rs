//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the rule pipeline and the
//! capabilities injected into it. Implementations live in `adapters`
//! and `rules`.

mod logger;
mod upgrade_policy;

pub use logger::RuleLogger;
pub use upgrade_policy::UpgradePolicy;

#[cfg(test)]
pub use logger::MockRuleLogger;
#[cfg(test)]
pub use upgrade_policy::MockUpgradePolicy;
