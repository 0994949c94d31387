use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// User-assigned priority of a risk record.
///
/// Independent of the PIRS score; operators set it by hand and it never feeds
/// into classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}
