use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Discrete severity tier shown across every risk view.
///
/// Score classification tops out at `High`; `Critical` only comes out of the
/// matrix composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
    Critical,
}

/// Display intent for a severity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    Destructive,
    Default,
    Secondary,
}
