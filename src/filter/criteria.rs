use crate::classify::{Tier, classify_by_score};
use crate::filter::TimeRange;
use crate::records::{Asset, AuditEntry, AuditStatus, Priority, RiskRecord, RiskStatus, RiskType};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Filter criteria for risk and alert lists.
///
/// `None` is the "all" sentinel for each field; active criteria combine with
/// logical AND. The search term matches case-insensitively against title,
/// location, and category; an empty term matches everything. `risk_level`
/// compares the tier produced by [`classify_by_score`], never a re-embedded
/// threshold. Score classification tops out at [`Tier::High`], so a
/// `Some(Tier::Critical)` criterion matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RiskCriteria {
    pub search_term: String,
    pub status: Option<RiskStatus>,
    pub priority: Option<Priority>,
    pub risk_level: Option<Tier>,
    pub risk_type: Option<RiskType>,
    pub time_range: TimeRange,
}

impl RiskCriteria {
    /// True when `record` passes every active criterion.
    #[must_use]
    pub fn matches(&self, record: &RiskRecord, now: DateTime<Utc>) -> bool {
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            let hit = contains_ci(&record.title, &needle)
                || contains_ci(&record.location, &needle)
                || contains_ci(&record.category, &needle);
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }

        if let Some(priority) = self.priority
            && record.priority != priority
        {
            return false;
        }

        if let Some(level) = self.risk_level
            && classify_by_score(record.risk_score).tier != level
        {
            return false;
        }

        if let Some(risk_type) = self.risk_type
            && record.risk_type != risk_type
        {
            return false;
        }

        self.time_range.contains(record.timestamp, now)
    }
}

/// Partial update for [`RiskCriteria`], mirroring the dashboard's
/// merge-style filter actions: `None` leaves a field unchanged, `Some`
/// overwrites it. For the exact-match fields a `Some(None)` puts the
/// criterion back to "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskCriteriaPatch {
    pub search_term: Option<String>,
    pub status: Option<Option<RiskStatus>>,
    pub priority: Option<Option<Priority>>,
    pub risk_level: Option<Option<Tier>>,
    pub risk_type: Option<Option<RiskType>>,
    pub time_range: Option<TimeRange>,
}

impl RiskCriteria {
    /// Merge `patch` onto the current criteria; fields the patch does not
    /// name keep their values.
    pub fn update(&mut self, patch: RiskCriteriaPatch) {
        if let Some(term) = patch.search_term {
            self.search_term = term;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(level) = patch.risk_level {
            self.risk_level = level;
        }
        if let Some(risk_type) = patch.risk_type {
            self.risk_type = risk_type;
        }
        if let Some(range) = patch.time_range {
            self.time_range = range;
        }
    }
}

/// Produce the visible subset of `records`. Input order is preserved;
/// ordering is a separate concern (see [`super::sort_risks`]).
#[must_use]
pub fn filter_risks(records: &[RiskRecord], criteria: &RiskCriteria, now: DateTime<Utc>) -> Vec<RiskRecord> {
    let kept: Vec<_> = records.iter().filter(|r| criteria.matches(r, now)).cloned().collect();
    debug!("risk filter kept {} of {} records", kept.len(), records.len());
    kept
}

/// Filter criteria for the asset registry.
///
/// A single case-insensitive search over name, type, location, and the owning
/// organization's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AssetCriteria {
    pub search_term: String,
}

impl AssetCriteria {
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        contains_ci(&asset.name, &needle)
            || contains_ci(&asset.asset_type, &needle)
            || contains_ci(&asset.location, &needle)
            || asset.organization.as_deref().is_some_and(|org| contains_ci(org, &needle))
    }
}

/// Produce the visible subset of `assets`, preserving input order.
#[must_use]
pub fn filter_assets(assets: &[Asset], criteria: &AssetCriteria) -> Vec<Asset> {
    let kept: Vec<_> = assets.iter().filter(|a| criteria.matches(a)).cloned().collect();
    debug!("asset filter kept {} of {} assets", kept.len(), assets.len());
    kept
}

/// Filter criteria for the audit trail: search over action, details, and the
/// acting user's name, plus an exact-match outcome filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AuditCriteria {
    pub search_term: String,
    pub status: Option<AuditStatus>,
}

impl AuditCriteria {
    #[must_use]
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            let hit = contains_ci(&entry.action, &needle)
                || contains_ci(&entry.details, &needle)
                || entry.user.as_deref().is_some_and(|user| contains_ci(user, &needle));
            if !hit {
                return false;
            }
        }

        self.status.is_none_or(|status| entry.status == status)
    }
}

/// Produce the visible subset of `entries`, preserving input order.
#[must_use]
pub fn filter_audit_log(entries: &[AuditEntry], criteria: &AuditCriteria) -> Vec<AuditEntry> {
    let kept: Vec<_> = entries.iter().filter(|e| criteria.matches(e)).cloned().collect();
    debug!("audit filter kept {} of {} entries", kept.len(), entries.len());
    kept
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
