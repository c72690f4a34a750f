//! Scoring tables. Passed into the scoring engine at construction so
//! alternate scoring policies can be swapped without code changes.

use serde::{Deserialize, Serialize};

use crate::constants::{CVSS_MAX, CVSS_MIN, FALSE_POSITIVE_PENALTY};
use crate::errors::{ConfigError, ConfigResult};
use crate::types::SeverityTable;

/// Inclusive CVSS band with its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvssBand {
    pub min: f64,
    pub max: f64,
    pub multiplier: f64,
}

impl CvssBand {
    pub fn contains(&self, cvss: f64) -> bool {
        self.min <= cvss && cvss <= self.max
    }
}

/// Length-graded report-quality tier for one text field.
///
/// `full_points` at `full_at` chars or more, `partial_points` at
/// `partial_at` or more, `present_points` for any non-empty text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityTier {
    pub full_at: usize,
    pub full_points: f64,
    pub partial_at: usize,
    pub partial_points: f64,
    pub present_points: f64,
}

impl QualityTier {
    pub fn points(&self, chars: usize) -> f64 {
        if chars >= self.full_at {
            self.full_points
        } else if chars >= self.partial_at {
            self.partial_points
        } else if chars > 0 {
            self.present_points
        } else {
            0.0
        }
    }
}

/// Speed bonus awarded when a finding lands strictly under `under_minutes`
/// after the round started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub under_minutes: f64,
    pub bonus: f64,
}

/// Configuration for the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base points per severity.
    pub severity_points: SeverityTable<f64>,
    /// CVSS bands, checked in order; first match wins.
    pub cvss_bands: Vec<CvssBand>,
    /// Multiplier for CVSS values outside every band.
    pub default_cvss_multiplier: f64,
    /// Uniqueness bonus as a fraction of the CVSS-scaled score.
    pub uniqueness_ratio: f64,
    pub description_quality: QualityTier,
    pub poc_quality: QualityTier,
    pub remediation_quality: QualityTier,
    /// Cap on the summed quality bonus.
    pub quality_cap: f64,
    /// Speed bands, checked in ascending `under_minutes` order.
    pub speed_bands: Vec<SpeedBand>,
    /// Total score of a false positive.
    pub false_positive_penalty: f64,
    /// Descriptions shorter than this count as a false-positive indicator.
    pub min_description_chars: usize,
    /// Proofs of concept shorter than this count as a false-positive indicator.
    pub min_poc_chars: usize,
    /// Indicator count at which a finding is flagged as a false positive.
    pub false_positive_threshold: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            severity_points: SeverityTable {
                critical: 100.0,
                high: 50.0,
                medium: 25.0,
                low: 10.0,
                info: 5.0,
            },
            cvss_bands: vec![
                CvssBand { min: 9.0, max: 10.0, multiplier: 2.0 },
                CvssBand { min: 7.0, max: 8.9, multiplier: 1.5 },
                CvssBand { min: 4.0, max: 6.9, multiplier: 1.2 },
                CvssBand { min: 0.1, max: 3.9, multiplier: 1.0 },
            ],
            default_cvss_multiplier: 1.0,
            uniqueness_ratio: 0.5,
            description_quality: QualityTier {
                full_at: 50,
                full_points: 7.0,
                partial_at: 20,
                partial_points: 4.0,
                present_points: 2.0,
            },
            poc_quality: QualityTier {
                full_at: 30,
                full_points: 7.0,
                partial_at: 10,
                partial_points: 4.0,
                present_points: 2.0,
            },
            remediation_quality: QualityTier {
                full_at: 30,
                full_points: 6.0,
                partial_at: 10,
                partial_points: 3.0,
                present_points: 1.0,
            },
            quality_cap: 20.0,
            speed_bands: vec![
                SpeedBand { under_minutes: 5.0, bonus: 20.0 },
                SpeedBand { under_minutes: 15.0, bonus: 10.0 },
                SpeedBand { under_minutes: 30.0, bonus: 5.0 },
            ],
            false_positive_penalty: FALSE_POSITIVE_PENALTY,
            min_description_chars: 10,
            min_poc_chars: 5,
            false_positive_threshold: 2,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for band in &self.cvss_bands {
            if band.min > band.max || band.min < CVSS_MIN || band.max > CVSS_MAX {
                return Err(ConfigError::invalid(
                    "scoring.cvss_bands",
                    format!("band [{}, {}] must lie within [0, 10] with min <= max", band.min, band.max),
                ));
            }
            if band.multiplier < 0.0 {
                return Err(ConfigError::invalid("scoring.cvss_bands", "multiplier must be >= 0"));
            }
        }
        for (severity, points) in self.severity_points.iter() {
            if points < 0.0 {
                return Err(ConfigError::invalid(
                    "scoring.severity_points",
                    format!("{severity} points must be >= 0"),
                ));
            }
        }
        if self.uniqueness_ratio < 0.0 {
            return Err(ConfigError::invalid("scoring.uniqueness_ratio", "must be >= 0"));
        }
        if self.quality_cap < 0.0 {
            return Err(ConfigError::invalid("scoring.quality_cap", "must be >= 0"));
        }
        if self.speed_bands.iter().any(|b| b.bonus < 0.0) {
            return Err(ConfigError::invalid("scoring.speed_bands", "bonus must be >= 0"));
        }
        if self.false_positive_threshold == 0 {
            return Err(ConfigError::invalid(
                "scoring.false_positive_threshold",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_tier_grades() {
        let tier = ScoringConfig::default().description_quality;
        assert_eq!(tier.points(0), 0.0);
        assert_eq!(tier.points(1), 2.0);
        assert_eq!(tier.points(20), 4.0);
        assert_eq!(tier.points(49), 4.0);
        assert_eq!(tier.points(50), 7.0);
    }

    #[test]
    fn test_cvss_band_is_inclusive() {
        let band = CvssBand { min: 7.0, max: 8.9, multiplier: 1.5 };
        assert!(band.contains(7.0));
        assert!(band.contains(8.9));
        assert!(!band.contains(8.95));
    }

    #[test]
    fn test_negative_bonus_rejected() {
        let mut config = ScoringConfig::default();
        config.speed_bands.push(SpeedBand { under_minutes: 60.0, bonus: -1.0 });
        assert!(config.validate().is_err());
    }
}
