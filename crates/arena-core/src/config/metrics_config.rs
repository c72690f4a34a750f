//! Metrics tracker configuration.

use serde::{Deserialize, Serialize};

use crate::constants::TREND_SLOPE_THRESHOLD;
use crate::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Slope (points per round) beyond which a trend is improving/declining.
    pub trend_slope_threshold: f64,
    /// Rounds required before any trend other than stable is reported.
    pub min_rounds_for_trend: usize,
    /// Number of findings listed in a scorecard.
    pub top_n: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            trend_slope_threshold: TREND_SLOPE_THRESHOLD,
            min_rounds_for_trend: 2,
            top_n: 5,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.trend_slope_threshold < 0.0 {
            return Err(ConfigError::invalid("metrics.trend_slope_threshold", "must be >= 0"));
        }
        if self.min_rounds_for_trend < 2 {
            return Err(ConfigError::invalid(
                "metrics.min_rounds_for_trend",
                "a slope needs at least 2 rounds",
            ));
        }
        Ok(())
    }
}
