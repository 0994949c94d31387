//! Severity classification.
//!
//! The 8/5 score thresholds live in exactly one function, [`classify_by_score`];
//! every consumer (feed filters, stats, badges, marker colors) goes through it
//! rather than re-embedding the numbers.

pub mod matrix;
mod score;
mod tier;

pub use score::{Classification, classify_by_score};
pub use tier::{Intent, Tier};
