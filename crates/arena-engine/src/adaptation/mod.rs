//! Strategy adaptation: per-category weight updates from realized outcomes.
//!
//! This is a bandit-style weight update, not full reinforcement learning:
//! no value function, no policy representation. The `WeightAdapter` trait is
//! the seam for substituting other adaptation policies.

pub mod bandit;
pub mod history;
pub mod recommendations;
pub mod rewards;
pub mod schedule;

pub use bandit::{AdaptationReport, BanditAdapter, ChangeReason, WeightChange};
pub use history::{LearningParameters, LearningSnapshot, RewardHistory};
pub use recommendations::{recommend, Recommendation};
pub use rewards::type_rewards;
pub use schedule::AdaptiveExploration;

use arena_core::StrategyWeights;

use crate::scoring::ScoredFinding;

/// Produces next round's weights from this round's outcomes.
///
/// Implementations own whatever history they need. The output must have
/// exactly the input's key set.
pub trait WeightAdapter {
    fn update(
        &mut self,
        weights: StrategyWeights,
        findings: &[ScoredFinding],
        round_score: f64,
        false_positive_count: usize,
    ) -> StrategyWeights;

    /// Short policy name for logs.
    fn name(&self) -> &'static str;
}
