//! pirs-engine crate
//!
//! Risk scoring, classification, and filtering for the pipeline-integrity
//! monitoring dashboard. Every view that lists or visualizes risks (feed,
//! list pages, detail matrices, map markers) consumes these functions, so the
//! score thresholds live in exactly one place: [`classify::classify_by_score`].
//!
//! The engine is pure and synchronous. It owns no I/O and no persisted state;
//! callers hand it record arrays fetched elsewhere and get back
//! classifications, filtered/sorted arrays, and aggregate counts.

pub mod classify;
pub mod filter;
pub mod recency;
pub mod records;
pub mod state;
pub mod stats;

pub use classify::{Classification, Intent, Tier, classify_by_score};
pub use filter::{
    AssetCriteria, AuditCriteria, RiskCriteria, RiskCriteriaPatch, SortField, SortOrder, SortSpec, TimeRange,
    filter_assets, filter_audit_log, filter_risks, sort_risks,
};
pub use recency::format_recency;
pub use records::{Asset, AssetStatus, AuditEntry, AuditStatus, Priority, RecordId, RiskRecord, RiskStatus, RiskType};
pub use state::{AppState, PreferencesPatch};
pub use stats::{
    AlertStats, AssetStats, AuditStats, compute_alert_stats, compute_asset_stats, compute_audit_stats,
};
