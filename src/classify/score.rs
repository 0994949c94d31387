use crate::classify::{Intent, Tier};
use serde::Serialize;

/// Result of classifying a PIRS score: the severity tier plus the display
/// intent the views use to pick badge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub intent: Intent,
}

/// Map a 0-10 PIRS score to a severity tier and display intent.
///
/// Thresholds are inclusive lower bounds: `>= 8` is high, `>= 5` is medium,
/// anything below is low. Inputs outside [0, 10] classify through the same
/// comparisons; there is no clamping and no rejection. `NaN` is a caller
/// contract violation (it falls into the low arm, but callers must guard at
/// the boundary rather than rely on that).
#[must_use]
pub fn classify_by_score(score: f64) -> Classification {
    if score >= 8.0 {
        Classification {
            tier: Tier::High,
            intent: Intent::Destructive,
        }
    } else if score >= 5.0 {
        Classification {
            tier: Tier::Medium,
            intent: Intent::Default,
        }
    } else {
        Classification {
            tier: Tier::Low,
            intent: Intent::Secondary,
        }
    }
}

impl Classification {
    /// Badge text for a feed card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.tier {
            Tier::High | Tier::Critical => "High Risk",
            Tier::Medium => "Medium Risk",
            Tier::Low => "Low Risk",
        }
    }

    /// Hex fill color for a map marker.
    #[must_use]
    pub const fn marker_color(self) -> &'static str {
        match self.tier {
            Tier::High | Tier::Critical => "#dc2626",
            Tier::Medium => "#f59e0b",
            Tier::Low => "#eab308",
        }
    }
}
