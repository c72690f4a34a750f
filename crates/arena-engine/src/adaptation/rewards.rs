//! Per-type reward for a round.

use arena_core::config::AdaptationConfig;
use rustc_hash::FxHashMap;

use crate::scoring::ScoredFinding;

/// Sum rewards per vulnerability type.
///
/// Valid findings earn their severity reward plus the unique bonus when
/// unique. False positives contribute the penalty instead.
pub fn type_rewards<'a>(
    findings: &'a [ScoredFinding],
    config: &AdaptationConfig,
) -> FxHashMap<&'a str, f64> {
    let mut rewards: FxHashMap<&str, f64> = FxHashMap::default();
    for f in findings {
        let reward = if f.is_false_positive {
            config.false_positive_penalty
        } else {
            let unique = if f.is_unique { config.unique_bonus } else { 0.0 };
            config.severity_rewards.get(f.severity()) + unique
        };
        *rewards.entry(f.vuln_type()).or_insert(0.0) += reward;
    }
    rewards
}

/// Number of findings per vulnerability type.
pub(crate) fn type_counts(findings: &[ScoredFinding]) -> FxHashMap<&str, usize> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for f in findings {
        *counts.entry(f.vuln_type()).or_insert(0) += 1;
    }
    counts
}
