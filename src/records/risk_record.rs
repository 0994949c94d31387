use crate::classify::matrix;
use crate::records::{Priority, RecordId, RiskStatus, RiskType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single risk item as surfaced to the dashboard feed and list views.
///
/// Field names match the wire payloads (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub id: RecordId,

    pub title: String,

    pub location: String,

    /// Free classification tag; searched, never scored.
    pub category: String,

    #[serde(rename = "type")]
    pub risk_type: RiskType,

    /// PIRS: the 0-10 overall severity used by feed and list views.
    ///
    /// Independent of `pof`/`cof`; the dataset carries no guarantee that one
    /// is derived from the other.
    pub risk_score: f64,

    /// Probability of failure, 1-5 ordinal, when an assessment recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pof: Option<u8>,

    /// Consequence of failure, 1-5 ordinal, when an assessment recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cof: Option<u8>,

    pub status: RiskStatus,

    pub priority: Priority,

    /// Map position of the detection, when the source geolocated it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    /// Detection time shown in the feed.
    pub timestamp: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    /// Changes on any field edit.
    pub updated_at: DateTime<Utc>,
}

impl RiskRecord {
    /// Probability ordinal for matrix display, deriving a fallback from the
    /// PIRS score when none was recorded.
    #[must_use]
    pub fn matrix_pof(&self) -> u8 {
        self.pof.unwrap_or_else(|| matrix::derived_pof(self.risk_score))
    }

    /// Consequence ordinal for matrix display, with the same fallback rule.
    #[must_use]
    pub fn matrix_cof(&self) -> u8 {
        self.cof.unwrap_or_else(|| matrix::derived_cof(self.risk_score))
    }
}
