//! Exploration-rate schedule driven by a team's recent round scores.

use arena_core::config::ExplorationScheduleConfig;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::debug;

/// Decays exploration while scores keep moving; raises it again on a
/// plateau (low variance) or a decline (last below first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveExploration {
    config: ExplorationScheduleConfig,
    rate: f64,
    scores: Vec<f64>,
}

impl AdaptiveExploration {
    pub fn new(config: ExplorationScheduleConfig) -> Self {
        let rate = config.initial_rate;
        Self {
            config,
            rate,
            scores: Vec::new(),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Record a round score and return the updated rate. The rate only
    /// moves once a full window of scores exists.
    pub fn record(&mut self, round_score: f64) -> f64 {
        self.scores.push(round_score);
        let window = self.config.window;
        if window == 0 || self.scores.len() < window {
            return self.rate;
        }

        let recent = &self.scores[self.scores.len() - window..];
        let variance = recent.iter().population_variance();
        let previous = self.rate;

        self.rate = if variance < self.config.plateau_variance {
            (self.rate * self.config.plateau_growth).min(self.config.plateau_ceiling)
        } else if recent[window - 1] < recent[0] {
            (self.rate * self.config.decline_growth).min(self.config.decline_ceiling)
        } else {
            (self.rate * self.config.decay_factor).max(self.config.min_rate)
        };

        debug!(previous, rate = self.rate, variance, "Exploration rate adjusted");
        self.rate
    }
}

impl Default for AdaptiveExploration {
    fn default() -> Self {
        Self::new(ExplorationScheduleConfig::default())
    }
}
