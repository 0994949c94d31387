mod asset;
mod audit;
mod priority;
mod record_id;
mod risk_record;
mod risk_type;
mod status;

pub use asset::{Asset, AssetStatus};
pub use audit::{AuditEntry, AuditStatus};
pub use priority::Priority;
pub use record_id::RecordId;
pub use risk_record::RiskRecord;
pub use risk_type::RiskType;
pub use status::RiskStatus;
