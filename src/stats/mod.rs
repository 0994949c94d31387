mod alert_stats;
mod asset_stats;
mod audit_stats;

pub use alert_stats::{AlertStats, compute_alert_stats};
pub use asset_stats::{AssetStats, compute_asset_stats};
pub use audit_stats::{AuditStats, compute_audit_stats};
