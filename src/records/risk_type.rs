use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Detection category of an alert. A free classification tag; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskType {
    Excavation,
    Vehicle,
    Ground,
    Construction,
    Other,
}
