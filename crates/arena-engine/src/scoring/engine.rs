//! ScoringEngine: deterministic point computation for one finding.

use arena_core::config::{ScoringConfig, SpeedBand};
use arena_core::{Finding, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::false_positive::count_indicators;
use super::quality::quality_bonus;
use crate::dedup::MarkedFinding;

/// Round-level inputs to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    pub round_number: u32,
    pub started_at: DateTime<Utc>,
}

impl RoundContext {
    pub fn new(round_number: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            round_number,
            started_at,
        }
    }

    /// Minutes between round start and discovery. Discoveries stamped
    /// before the round started count as zero elapsed.
    pub fn elapsed_minutes(&self, finding: &Finding) -> f64 {
        let elapsed = finding.discovered_at() - self.started_at;
        (elapsed.num_milliseconds() as f64 / 60_000.0).max(0.0)
    }
}

/// A finding annotated with its full score breakdown. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFinding {
    pub finding: Finding,
    pub is_unique: bool,
    pub is_false_positive: bool,
    /// Number of false-positive indicators that held.
    pub false_positive_indicators: usize,
    pub base_points: f64,
    pub cvss_multiplier: f64,
    /// `base_points × cvss_multiplier`.
    pub cvss_points: f64,
    pub uniqueness_bonus: f64,
    pub quality_bonus: f64,
    pub speed_bonus: f64,
    pub total_score: f64,
}

impl ScoredFinding {
    pub fn is_valid(&self) -> bool {
        !self.is_false_positive
    }

    pub fn severity(&self) -> Severity {
        self.finding.severity()
    }

    pub fn vuln_type(&self) -> &str {
        self.finding.vuln_type()
    }
}

/// Scoring engine. Holds only its immutable tables.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    /// Speed bands sorted by ascending cutoff.
    speed_bands: Vec<SpeedBand>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        let mut speed_bands = config.speed_bands.clone();
        speed_bands.sort_by(|a, b| a.under_minutes.total_cmp(&b.under_minutes));
        Self {
            config,
            speed_bands,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one deduplicated finding.
    pub fn evaluate(&self, marked: MarkedFinding, ctx: &RoundContext) -> ScoredFinding {
        let MarkedFinding {
            finding, is_unique, ..
        } = marked;

        let indicators = count_indicators(&finding, &self.config);
        if indicators >= self.config.false_positive_threshold {
            debug!(
                round = ctx.round_number,
                team = %finding.team_id(),
                vuln_type = finding.vuln_type(),
                indicators,
                "Finding flagged as false positive"
            );
            return ScoredFinding {
                finding,
                is_unique,
                is_false_positive: true,
                false_positive_indicators: indicators,
                base_points: 0.0,
                cvss_multiplier: 0.0,
                cvss_points: 0.0,
                uniqueness_bonus: 0.0,
                quality_bonus: 0.0,
                speed_bonus: 0.0,
                total_score: self.config.false_positive_penalty,
            };
        }

        let base_points = self.config.severity_points.get(finding.severity());
        let cvss_multiplier = self.cvss_multiplier(finding.cvss_score());
        let cvss_points = base_points * cvss_multiplier;
        let uniqueness_bonus = if is_unique {
            cvss_points * self.config.uniqueness_ratio
        } else {
            0.0
        };
        let quality_bonus = quality_bonus(&finding, &self.config);
        let speed_bonus = self.speed_bonus(ctx.elapsed_minutes(&finding));
        let total_score = cvss_points + uniqueness_bonus + quality_bonus + speed_bonus;

        debug!(
            round = ctx.round_number,
            team = %finding.team_id(),
            vuln_type = finding.vuln_type(),
            severity = %finding.severity(),
            is_unique,
            total_score,
            "Finding scored"
        );

        ScoredFinding {
            finding,
            is_unique,
            is_false_positive: false,
            false_positive_indicators: indicators,
            base_points,
            cvss_multiplier,
            cvss_points,
            uniqueness_bonus,
            quality_bonus,
            speed_bonus,
            total_score,
        }
    }

    /// Score a whole round's deduplicated findings, preserving order.
    pub fn evaluate_all(&self, marked: Vec<MarkedFinding>, ctx: &RoundContext) -> Vec<ScoredFinding> {
        marked.into_iter().map(|m| self.evaluate(m, ctx)).collect()
    }

    /// First band containing the score wins; outside every band the default applies.
    pub fn cvss_multiplier(&self, cvss: f64) -> f64 {
        self.config
            .cvss_bands
            .iter()
            .find(|band| band.contains(cvss))
            .map(|band| band.multiplier)
            .unwrap_or(self.config.default_cvss_multiplier)
    }

    pub fn speed_bonus(&self, elapsed_minutes: f64) -> f64 {
        self.speed_bands
            .iter()
            .find(|band| elapsed_minutes < band.under_minutes)
            .map(|band| band.bonus)
            .unwrap_or(0.0)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvss_bands() {
        let engine = ScoringEngine::default();
        assert_eq!(engine.cvss_multiplier(10.0), 2.0);
        assert_eq!(engine.cvss_multiplier(9.0), 2.0);
        assert_eq!(engine.cvss_multiplier(8.9), 1.5);
        assert_eq!(engine.cvss_multiplier(7.0), 1.5);
        assert_eq!(engine.cvss_multiplier(6.9), 1.2);
        assert_eq!(engine.cvss_multiplier(4.0), 1.2);
        assert_eq!(engine.cvss_multiplier(3.9), 1.0);
        assert_eq!(engine.cvss_multiplier(0.1), 1.0);
    }

    #[test]
    fn test_cvss_gaps_use_default() {
        let engine = ScoringEngine::default();
        assert_eq!(engine.cvss_multiplier(8.95), 1.0);
        assert_eq!(engine.cvss_multiplier(6.95), 1.0);
        assert_eq!(engine.cvss_multiplier(0.0), 1.0);
    }

    #[test]
    fn test_speed_bands() {
        let engine = ScoringEngine::default();
        assert_eq!(engine.speed_bonus(0.0), 20.0);
        assert_eq!(engine.speed_bonus(4.99), 20.0);
        assert_eq!(engine.speed_bonus(5.0), 10.0);
        assert_eq!(engine.speed_bonus(14.99), 10.0);
        assert_eq!(engine.speed_bonus(15.0), 5.0);
        assert_eq!(engine.speed_bonus(29.99), 5.0);
        assert_eq!(engine.speed_bonus(30.0), 0.0);
    }

    #[test]
    fn test_unsorted_speed_bands_are_sorted() {
        let mut config = ScoringConfig::default();
        config.speed_bands.reverse();
        let engine = ScoringEngine::new(config);
        assert_eq!(engine.speed_bonus(1.0), 20.0);
    }
}
