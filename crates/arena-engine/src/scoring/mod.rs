//! Scoring: converts a deduplicated finding into points.
//!
//! total = base(severity) × cvss_multiplier
//!       + uniqueness bonus (unique only)
//!       + quality bonus (capped)
//!       + speed bonus
//!
//! A finding flagged by the false-positive screen scores the fixed penalty
//! and nothing else.

pub mod engine;
pub mod false_positive;
pub mod quality;
pub mod scorecard;

pub use engine::{RoundContext, ScoredFinding, ScoringEngine};
pub use false_positive::count_indicators;
pub use quality::quality_bonus;
pub use scorecard::{Scorecard, TopFinding};
