//! Cumulative per-team metrics, round rankings, trends and specialist awards.

pub mod analysis;
pub mod ranking;
pub mod team_metrics;
pub mod tracker;
pub mod trend;

pub use analysis::{
    AggregateStatistics, ComparativeAnalysis, LeaderboardEntry, MostImproved, OverallWinner,
    SpecialistAward, Specialists,
};
pub use ranking::{rank_by_score, RoundRanking};
pub use team_metrics::TeamMetrics;
pub use tracker::MetricsTracker;
pub use trend::{classify_trend, score_slope, Trend};
