use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle state of a risk record.
///
/// Transitions are unconstrained: any state is reachable from any other by a
/// plain status edit, like a lightweight issue tracker. Records are never
/// deleted in-app; they move to `Archived` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskStatus {
    Active,
    Investigating,
    Monitoring,
    Resolved,
    Archived,
}

impl RiskStatus {
    /// States that surface in the live alert feed.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Investigating | Self::Monitoring)
    }
}
