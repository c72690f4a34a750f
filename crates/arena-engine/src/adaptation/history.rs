//! Reward history per vulnerability type, and its serializable snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recorded per-round rewards for one vulnerability type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardHistory(Vec<f64>);

impl RewardHistory {
    pub fn push(&mut self, reward: f64) {
        self.0.push(reward);
    }

    /// Mean of the last `window` rewards; 0 with no history.
    pub fn baseline(&self, window: usize) -> f64 {
        if self.0.is_empty() || window == 0 {
            return 0.0;
        }
        let start = self.0.len().saturating_sub(window);
        let recent = &self.0[start..];
        recent.iter().sum::<f64>() / recent.len() as f64
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningParameters {
    pub learning_rate: f64,
    pub exploration_rate: f64,
    pub baseline_window: usize,
}

/// Exportable learner state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSnapshot {
    pub parameters: LearningParameters,
    pub history: BTreeMap<String, RewardHistory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_baseline_is_zero() {
        assert_eq!(RewardHistory::default().baseline(5), 0.0);
    }

    #[test]
    fn test_baseline_uses_last_window() {
        let mut h = RewardHistory::default();
        for r in [1000.0, 10.0, 20.0, 30.0, 40.0, 50.0] {
            h.push(r);
        }
        assert_eq!(h.baseline(5), 30.0);
        assert_eq!(h.baseline(2), 45.0);
    }

    #[test]
    fn test_short_history_averages_everything() {
        let mut h = RewardHistory::default();
        h.push(100.0);
        h.push(50.0);
        assert_eq!(h.baseline(5), 75.0);
    }
}
