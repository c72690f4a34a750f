//! Weight-adaptation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASELINE_WINDOW, EXPLORATION_MAGNITUDE, EXPLORATION_RATE, FALSE_POSITIVE_PENALTY,
    LEARNING_RATE, MAX_WEIGHT, MIN_WEIGHT,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::types::SeverityTable;

/// Configuration for the bandit-style weight adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationConfig {
    pub learning_rate: f64,
    /// Probability of adding an exploration perturbation per type per round.
    pub exploration_rate: f64,
    /// Perturbations are sampled uniformly from [-magnitude, magnitude].
    pub exploration_magnitude: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Number of recent rewards averaged into the baseline.
    pub baseline_window: usize,
    /// Reward per valid finding, by severity.
    pub severity_rewards: SeverityTable<f64>,
    /// Added to a valid finding's reward when it was unique.
    pub unique_bonus: f64,
    /// Reward contribution of a false positive.
    pub false_positive_penalty: f64,
    /// Weight moves smaller than this are not logged as changes.
    pub change_log_threshold: f64,
    /// Seed for the exploration RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Optional exploration-rate schedule driven by round scores.
    pub schedule: Option<ExplorationScheduleConfig>,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            exploration_rate: EXPLORATION_RATE,
            exploration_magnitude: EXPLORATION_MAGNITUDE,
            min_weight: MIN_WEIGHT,
            max_weight: MAX_WEIGHT,
            baseline_window: BASELINE_WINDOW,
            severity_rewards: SeverityTable {
                critical: 100.0,
                high: 50.0,
                medium: 25.0,
                low: 10.0,
                info: 10.0,
            },
            unique_bonus: 50.0,
            false_positive_penalty: FALSE_POSITIVE_PENALTY,
            change_log_threshold: 0.01,
            seed: None,
            schedule: None,
        }
    }
}

impl AdaptationConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_weight < self.max_weight) {
            return Err(ConfigError::invalid(
                "adaptation.min_weight",
                format!("min_weight ({}) must be below max_weight ({})", self.min_weight, self.max_weight),
            ));
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(ConfigError::invalid("adaptation.exploration_rate", "must lie in [0, 1]"));
        }
        if self.learning_rate < 0.0 {
            return Err(ConfigError::invalid("adaptation.learning_rate", "must be >= 0"));
        }
        if self.exploration_magnitude < 0.0 {
            return Err(ConfigError::invalid("adaptation.exploration_magnitude", "must be >= 0"));
        }
        if self.baseline_window == 0 {
            return Err(ConfigError::invalid("adaptation.baseline_window", "must be at least 1"));
        }
        if let Some(schedule) = &self.schedule {
            schedule.validate()?;
        }
        Ok(())
    }
}

/// Exploration-rate schedule: decays while scores keep moving, rises again
/// when they plateau or decline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationScheduleConfig {
    pub initial_rate: f64,
    pub min_rate: f64,
    pub decay_factor: f64,
    /// Number of recent scores inspected.
    pub window: usize,
    /// Population variance below this counts as a plateau.
    pub plateau_variance: f64,
    pub plateau_growth: f64,
    pub plateau_ceiling: f64,
    pub decline_growth: f64,
    pub decline_ceiling: f64,
}

impl Default for ExplorationScheduleConfig {
    fn default() -> Self {
        Self {
            initial_rate: 0.3,
            min_rate: 0.05,
            decay_factor: 0.95,
            window: 5,
            plateau_variance: 10.0,
            plateau_growth: 1.1,
            plateau_ceiling: 0.3,
            decline_growth: 1.2,
            decline_ceiling: 0.4,
        }
    }
}

impl ExplorationScheduleConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let rates = [
            ("initial_rate", self.initial_rate),
            ("min_rate", self.min_rate),
            ("plateau_ceiling", self.plateau_ceiling),
            ("decline_ceiling", self.decline_ceiling),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::invalid(
                    &format!("adaptation.schedule.{name}"),
                    "must lie in [0, 1]",
                ));
            }
        }
        if self.window < 2 {
            return Err(ConfigError::invalid("adaptation.schedule.window", "must be at least 2"));
        }
        Ok(())
    }
}
