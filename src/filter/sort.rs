use crate::records::RiskRecord;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sortable columns of a risk list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    RiskScore,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current sort column and direction for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    /// Lists open on most-recently-updated first.
    fn default() -> Self {
        Self {
            field: SortField::UpdatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    /// Header-click behavior: the same column flips direction, a new column
    /// starts descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Desc;
        }
    }
}

/// Sort records in place.
///
/// The sort is stable, so records with equal keys keep their input order;
/// that is the documented tiebreak and makes repeated renders deterministic.
/// Score keys compare with `total_cmp`.
pub fn sort_risks(records: &mut [RiskRecord], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ord = match spec.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::RiskScore => a.risk_score.total_cmp(&b.risk_score),
        };
        match spec.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
