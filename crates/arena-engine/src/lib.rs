//! # arena-engine
//!
//! Scoring & strategy-adaptation engine for round-based competitions.
//!
//! ## Modules
//! - `dedup`: round-global duplicate detection over every team's submissions
//! - `scoring`: multi-factor point formula, false-positive screen, scorecards
//! - `adaptation`: bandit-style per-category weight updates, exploration schedule, recommendations
//! - `metrics`: cumulative team metrics, rankings, trends, specialist awards
//! - `round`: per-round records and the championship coordinator
//! - `export`: JSON export document and scoped file writer
//!
//! Ties anywhere in the engine (concurrent submissions, rankings, awards)
//! break by ascending team id.

pub mod adaptation;
pub mod dedup;
pub mod export;
pub mod metrics;
pub mod round;
pub mod scoring;

pub use adaptation::{BanditAdapter, WeightAdapter};
pub use dedup::{RoundDeduplicator, SubmissionLog};
pub use metrics::MetricsTracker;
pub use round::{Championship, RoundRecord, TeamRoundResult};
pub use scoring::{RoundContext, ScoredFinding, ScoringEngine};
