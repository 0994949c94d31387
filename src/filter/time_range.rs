use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Rolling time window for feed filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    #[strum(serialize = "1h")]
    LastHour,

    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    LastDay,

    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    LastWeek,

    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    LastMonth,

    /// No restriction. The default, so an absent range fails open.
    #[default]
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
}

impl TimeRange {
    /// Window length in hours; `None` for the unbounded window.
    #[must_use]
    pub const fn hours(self) -> Option<f64> {
        match self {
            Self::LastHour => Some(1.0),
            Self::LastDay => Some(24.0),
            Self::LastWeek => Some(168.0),
            Self::LastMonth => Some(720.0),
            Self::All => None,
        }
    }

    /// True when `timestamp` falls inside the window ending at `now`.
    ///
    /// Elapsed time is measured in milliseconds and converted to fractional
    /// hours; a record sitting exactly on the boundary is still inside.
    /// Future timestamps (negative elapsed time) are always inside.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "millisecond spans are far below f64 mantissa limits here")]
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let Some(limit) = self.hours() else {
            return true;
        };
        let elapsed_hours = (now - timestamp).num_milliseconds() as f64 / 3_600_000.0;
        elapsed_hours <= limit
    }
}
