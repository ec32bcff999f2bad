//! Upgrade policy port
//!
//! Defines the ecosystem-specific version-ordering oracle.

use crate::core::models::Versions;

/// Decides whether a version transition is a legitimate upgrade
///
/// Implementations encode one ecosystem's ordering rules. An error means
/// the oracle itself failed, not that the upgrade was rejected.
#[cfg_attr(test, mockall::automock)]
pub trait UpgradePolicy: Send + Sync {
    /// `true` only when `versions.new` is a forward upgrade of `versions.old`
    fn is_valid_upgrade(&self, versions: &Versions) -> anyhow::Result<bool>;
}
