use crate::records::{AuditEntry, AuditStatus};
use serde::Serialize;

/// Headline figures for the audit trail page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStats {
    pub total: usize,
    /// Percentage of entries that succeeded, rounded to the nearest whole
    /// percent; 0 for an empty log.
    pub success_rate: u8,
    pub warnings: usize,
    pub errors: usize,
}

/// Reduce `entries` to the audit page headline figures. Order independent.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "a rounded 0-100 percentage always fits"
)]
pub fn compute_audit_stats(entries: &[AuditEntry]) -> AuditStats {
    let total = entries.len();
    let successes = entries.iter().filter(|e| e.status == AuditStatus::Success).count();
    let warnings = entries.iter().filter(|e| e.status == AuditStatus::Warning).count();
    let errors = entries.iter().filter(|e| e.status == AuditStatus::Error).count();

    let success_rate = if total == 0 {
        0
    } else {
        ((successes as f64 / total as f64) * 100.0).round() as u8
    };

    AuditStats {
        total,
        success_rate,
        warnings,
        errors,
    }
}
