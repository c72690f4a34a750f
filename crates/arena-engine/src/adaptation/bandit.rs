//! BanditAdapter: reward-minus-baseline weight update with epsilon exploration.
//!
//! Per type present in the input weights:
//!   delta = learning_rate × (reward − baseline) × frequency
//!   (+ uniform perturbation with probability exploration_rate)
//!   new   = clamp(old + delta, min_weight, max_weight)
//! then the round's reward joins the type's history.

use std::collections::BTreeMap;

use arena_core::config::AdaptationConfig;
use arena_core::StrategyWeights;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::{LearningParameters, LearningSnapshot, RewardHistory};
use super::rewards::{type_counts, type_rewards};
use super::WeightAdapter;
use crate::scoring::ScoredFinding;

/// Why a weight moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    /// Reward beat the baseline by more than 10.
    HighSuccess,
    /// Reward fell short of the baseline by more than 10.
    PoorPerformance,
    /// More than 30% of the round's findings were of this type.
    Frequent,
    /// Under 5% of the round's findings were of this type.
    Rare,
    Maintaining,
}

impl ChangeReason {
    fn classify(reward: f64, baseline: f64, frequency: f64) -> Self {
        if reward > baseline + 10.0 {
            Self::HighSuccess
        } else if reward < baseline - 10.0 {
            Self::PoorPerformance
        } else if frequency > 0.3 {
            Self::Frequent
        } else if frequency < 0.05 {
            Self::Rare
        } else {
            Self::Maintaining
        }
    }
}

/// One logged weight move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightChange {
    pub vuln_type: String,
    pub old_weight: f64,
    pub new_weight: f64,
    pub reward: f64,
    pub baseline: f64,
    pub frequency: f64,
    pub explored: bool,
    pub reason: ChangeReason,
}

/// New weights plus the moves that exceeded the change-log threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationReport {
    pub weights: StrategyWeights,
    pub changes: Vec<WeightChange>,
}

/// Bandit-style adapter. Owns per-type reward history and an injected RNG.
#[derive(Debug, Clone)]
pub struct BanditAdapter<R = ChaCha8Rng> {
    config: AdaptationConfig,
    exploration_rate: f64,
    history: FxHashMap<String, RewardHistory>,
    rng: R,
}

impl BanditAdapter<ChaCha8Rng> {
    /// Reproducible adapter seeded with `seed`.
    pub fn seeded(config: AdaptationConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: AdaptationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> BanditAdapter<R> {
    pub fn with_rng(config: AdaptationConfig, rng: R) -> Self {
        let exploration_rate = config.exploration_rate;
        Self {
            config,
            exploration_rate,
            history: FxHashMap::default(),
            rng,
        }
    }

    pub fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Override the exploration probability, clamped to [0, 1].
    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.exploration_rate = rate.clamp(0.0, 1.0);
    }

    /// Current baseline for a type: mean of its recent rewards, 0 if none.
    pub fn baseline(&self, vuln_type: &str) -> f64 {
        self.history
            .get(vuln_type)
            .map(|h| h.baseline(self.config.baseline_window))
            .unwrap_or(0.0)
    }

    pub fn history(&self, vuln_type: &str) -> Option<&RewardHistory> {
        self.history.get(vuln_type)
    }

    /// Full update with a change log.
    pub fn update_detailed(
        &mut self,
        weights: StrategyWeights,
        findings: &[ScoredFinding],
        round_score: f64,
        false_positive_count: usize,
    ) -> AdaptationReport {
        let rewards = type_rewards(findings, &self.config);
        let counts = type_counts(findings);
        let total = findings.len();

        let mut next = weights.clone();
        let mut changes = Vec::new();

        // BTreeMap-backed iteration: RNG draws happen in tag order.
        for (vuln_type, old_weight) in weights.iter() {
            let reward = rewards.get(vuln_type).copied().unwrap_or(0.0);
            let baseline = self.baseline(vuln_type);
            let frequency = if total == 0 {
                0.0
            } else {
                counts.get(vuln_type).copied().unwrap_or(0) as f64 / total as f64
            };

            let mut delta = self.config.learning_rate * (reward - baseline) * frequency;
            let explored = self.rng.gen::<f64>() < self.exploration_rate;
            if explored && self.config.exploration_magnitude > 0.0 {
                let magnitude = self.config.exploration_magnitude;
                delta += self.rng.gen_range(-magnitude..=magnitude);
            }

            let new_weight = (old_weight + delta)
                .max(self.config.min_weight)
                .min(self.config.max_weight);
            next.replace_existing(vuln_type, new_weight);

            if (new_weight - old_weight).abs() > self.config.change_log_threshold {
                let change = WeightChange {
                    vuln_type: vuln_type.to_string(),
                    old_weight,
                    new_weight,
                    reward,
                    baseline,
                    frequency,
                    explored,
                    reason: ChangeReason::classify(reward, baseline, frequency),
                };
                debug!(
                    vuln_type,
                    old_weight,
                    new_weight,
                    reward,
                    baseline,
                    reason = ?change.reason,
                    "Strategy weight updated"
                );
                changes.push(change);
            }

            self.history
                .entry(vuln_type.to_string())
                .or_default()
                .push(reward);
        }

        info!(
            types = weights.len(),
            changed = changes.len(),
            findings = total,
            round_score,
            false_positives = false_positive_count,
            "Strategy weights adapted"
        );

        AdaptationReport {
            weights: next,
            changes,
        }
    }

    pub fn snapshot(&self) -> LearningSnapshot {
        LearningSnapshot {
            parameters: LearningParameters {
                learning_rate: self.config.learning_rate,
                exploration_rate: self.exploration_rate,
                baseline_window: self.config.baseline_window,
            },
            history: self
                .history
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// Replace the reward history with a snapshot's. Parameters other than
    /// the exploration rate stay as configured.
    pub fn restore(&mut self, snapshot: LearningSnapshot) {
        self.history = snapshot.history.into_iter().collect();
        self.set_exploration_rate(snapshot.parameters.exploration_rate);
    }
}

impl<R: Rng> WeightAdapter for BanditAdapter<R> {
    fn update(
        &mut self,
        weights: StrategyWeights,
        findings: &[ScoredFinding],
        round_score: f64,
        false_positive_count: usize,
    ) -> StrategyWeights {
        self.update_detailed(weights, findings, round_score, false_positive_count)
            .weights
    }

    fn name(&self) -> &'static str {
        "bandit"
    }
}
