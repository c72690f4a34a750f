//! Score-trend classification from a least-squares slope.

use std::fmt;

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Least-squares slope of `(round index, score)`. 0 with fewer than two
/// points; a flat series yields 0 naturally.
pub fn score_slope(scores: &[f64]) -> f64 {
    let n = scores.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = scores.iter().mean();

    let (num, den) = scores
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

pub fn classify_trend(scores: &[f64], threshold: f64, min_rounds: usize) -> Trend {
    if scores.len() < min_rounds.max(2) {
        return Trend::Stable;
    }
    let slope = score_slope(scores);
    if slope > threshold {
        Trend::Improving
    } else if slope < -threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
