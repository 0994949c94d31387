use crate::records::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A physical asset in the registry: a pipeline section, station, valve, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: RecordId,

    pub name: String,

    /// Free-form asset kind ("Pipeline", "Compressor Station", ...); the
    /// registry derives its type dropdown from the observed values.
    #[serde(rename = "type")]
    pub asset_type: String,

    pub location: String,

    /// Owning organization name, when the row joins one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// PIRS carried by the asset's worst current risk.
    pub risk_score: f64,

    pub status: AssetStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_inspection: Option<DateTime<Utc>>,
}

/// Operational state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetStatus {
    Operational,
    Active,
    Maintenance,
    Critical,
    Inactive,
}
