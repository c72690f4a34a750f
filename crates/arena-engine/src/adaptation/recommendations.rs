//! Strategy recommendations from current weights, score history and learned baselines.

use std::fmt;

use arena_core::StrategyWeights;
use rand::Rng;
use serde::Serialize;

use super::bandit::BanditAdapter;

const TREND_WINDOW: usize = 3;
const DECLINE_FACTOR: f64 = 0.8;
const IMPROVE_FACTOR: f64 = 1.2;
const FOCUS_SHARE: f64 = 0.7;
const NEGLECTED_BELOW: f64 = 0.3;
const HIGH_SUCCESS_BASELINE: f64 = 50.0;
const MAX_LISTED: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Declining { recent_mean: f64, overall_mean: f64 },
    Improving { recent_mean: f64, overall_mean: f64 },
    TooFocused { top: Vec<String>, share: f64 },
    Neglected { vuln_types: Vec<String> },
    HighSuccess { vuln_types: Vec<String> },
    Adequate,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declining { .. } => {
                f.write_str("Performance declining: diversify vulnerability focus")
            }
            Self::Improving { .. } => {
                f.write_str("Performance improving: continue current strategy direction")
            }
            Self::TooFocused { top, .. } => write!(
                f,
                "Heavily focused on {}; consider broadening coverage",
                top.join(", ")
            ),
            Self::Neglected { vuln_types } => write!(
                f,
                "Low coverage areas: {}; these may have untapped potential",
                vuln_types.join(", ")
            ),
            Self::HighSuccess { vuln_types } => write!(
                f,
                "High success with {}; maintain focus",
                vuln_types.join(", ")
            ),
            Self::Adequate => f.write_str("Strategy appears well-balanced; continue current approach"),
        }
    }
}

/// Recommendations for a team. Never empty: falls back to `Adequate`.
pub fn recommend<R: Rng>(
    weights: &StrategyWeights,
    score_history: &[f64],
    adapter: &BanditAdapter<R>,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if score_history.len() >= TREND_WINDOW {
        let recent = &score_history[score_history.len() - TREND_WINDOW..];
        let recent_mean = recent.iter().sum::<f64>() / TREND_WINDOW as f64;
        let overall_mean = score_history.iter().sum::<f64>() / score_history.len() as f64;
        if recent_mean < overall_mean * DECLINE_FACTOR {
            out.push(Recommendation::Declining {
                recent_mean,
                overall_mean,
            });
        } else if recent_mean > overall_mean * IMPROVE_FACTOR {
            out.push(Recommendation::Improving {
                recent_mean,
                overall_mean,
            });
        }
    }

    let total = weights.total();
    if total > 0.0 {
        let mut ranked: Vec<(&str, f64)> = weights.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let top: Vec<(&str, f64)> = ranked.into_iter().take(MAX_LISTED).collect();
        let share = top.iter().map(|(_, w)| w).sum::<f64>() / total;
        if share > FOCUS_SHARE {
            out.push(Recommendation::TooFocused {
                top: top.iter().map(|(t, _)| t.to_string()).collect(),
                share,
            });
        }
    }

    let neglected: Vec<String> = weights
        .iter()
        .filter(|(_, w)| *w < NEGLECTED_BELOW)
        .map(|(t, _)| t.to_string())
        .take(MAX_LISTED)
        .collect();
    if !neglected.is_empty() {
        out.push(Recommendation::Neglected {
            vuln_types: neglected,
        });
    }

    let high: Vec<String> = weights
        .keys()
        .filter(|t| adapter.baseline(t) > HIGH_SUCCESS_BASELINE)
        .map(str::to_string)
        .take(MAX_LISTED)
        .collect();
    if !high.is_empty() {
        out.push(Recommendation::HighSuccess { vuln_types: high });
    }

    if out.is_empty() {
        out.push(Recommendation::Adequate);
    }
    out
}
