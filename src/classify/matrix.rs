//! The 5x5 risk-assessment matrix.
//!
//! The widget derives two different composites from the same `pof`/`cof`
//! inputs: grid cells are colored by the *sum* (range 2-10) while the headline
//! figure shown to the user is the *product* (range 1-25). The two ladders
//! happen to share cut points but they are distinct displays; keep them as
//! separate computations.

use crate::classify::Tier;

/// Tier of a single matrix cell, from the sum composite.
#[must_use]
pub fn cell_tier(pof: u8, cof: u8) -> Tier {
    let composite = u16::from(pof) + u16::from(cof);
    if composite <= 4 {
        Tier::Low
    } else if composite <= 6 {
        Tier::Medium
    } else if composite <= 8 {
        Tier::High
    } else {
        Tier::Critical
    }
}

/// Tier of the headline `P x C` figure, from the product composite.
#[must_use]
pub fn headline_tier(pof: u8, cof: u8) -> Tier {
    let composite = u16::from(pof) * u16::from(cof);
    if composite <= 4 {
        Tier::Low
    } else if composite <= 6 {
        Tier::Medium
    } else if composite <= 8 {
        Tier::High
    } else {
        Tier::Critical
    }
}

/// Fallback probability ordinal when a record carries no explicit `pof`:
/// `floor(score / 2) + 1`. Not clamped; scores outside 0-10 produce ordinals
/// outside 1-5, consistent with the permissive score handling everywhere else.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ordinals are tiny and non-negative over the documented score domain"
)]
pub fn derived_pof(risk_score: f64) -> u8 {
    (risk_score / 2.0).floor() as u8 + 1
}

/// Fallback consequence ordinal: `ceil(score / 2) + 1`.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ordinals are tiny and non-negative over the documented score domain"
)]
pub fn derived_cof(risk_score: f64) -> u8 {
    (risk_score / 2.0).ceil() as u8 + 1
}
