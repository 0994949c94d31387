use crate::records::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One entry in the administrative audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: RecordId,

    /// Short action name ("user.login", "risk.status_update", ...).
    pub action: String,

    pub details: String,

    /// Acting user's display name; absent for system actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    pub status: AuditStatus,

    pub timestamp: DateTime<Utc>,
}

/// Outcome recorded for an audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuditStatus {
    Success,
    Warning,
    Error,
}
