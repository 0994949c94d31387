use crate::classify::{Tier, classify_by_score};
use crate::records::{RiskRecord, RiskStatus, RiskType};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate counts for an alert feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Frequency by lifecycle state; observed keys only, no zero-filling.
    pub by_status: HashMap<RiskStatus, usize>,
    /// Frequency by detection category; observed keys only.
    pub by_type: HashMap<RiskType, usize>,
}

/// Reduce `records` to aggregate counts.
///
/// The tier counts go through [`classify_by_score`] so they can never drift
/// from the badges and feed filters. Pure and order independent: any
/// permutation of `records` yields identical stats.
#[must_use]
pub fn compute_alert_stats(records: &[RiskRecord]) -> AlertStats {
    let mut stats = AlertStats {
        total: records.len(),
        ..AlertStats::default()
    };

    for record in records {
        match classify_by_score(record.risk_score).tier {
            Tier::High | Tier::Critical => stats.high += 1,
            Tier::Medium => stats.medium += 1,
            Tier::Low => stats.low += 1,
        }
        *stats.by_status.entry(record.status).or_insert(0) += 1;
        *stats.by_type.entry(record.risk_type).or_insert(0) += 1;
    }

    stats
}
