mod criteria;
mod sort;
mod time_range;

pub use criteria::{
    AssetCriteria, AuditCriteria, RiskCriteria, RiskCriteriaPatch, filter_assets, filter_audit_log, filter_risks,
};
pub use sort::{SortField, SortOrder, SortSpec, sort_risks};
pub use time_range::TimeRange;
