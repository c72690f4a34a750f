//! TeamMetrics: a team's cumulative state across the championship.

use std::collections::BTreeMap;

use arena_core::config::MetricsConfig;
use arena_core::{SeverityTable, TeamId};
use serde::{Deserialize, Serialize};

use super::trend::{classify_trend, Trend};
use crate::round::TeamRoundResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub team_id: TeamId,
    pub team_name: String,

    pub total_score: f64,
    pub scores_per_round: Vec<f64>,
    pub average_score: f64,
    pub score_trend: Trend,

    /// Valid (non-false-positive) findings.
    pub total_bugs: u32,
    pub bugs_per_round: Vec<u32>,
    pub unique_bugs: u32,
    pub duplicate_bugs: u32,
    pub severity_counts: SeverityTable<u32>,
    pub vuln_types: BTreeMap<String, u32>,

    pub false_positives: u32,
    /// False positives over all reports so far.
    pub false_positive_rate: f64,

    pub quality_score_total: f64,
    pub quality_score_samples: u32,
    pub average_report_quality: f64,

    /// Per-round mean discovery latency, only for rounds that had one.
    pub latency_per_round: Vec<f64>,
    pub average_discovery_latency_secs: f64,

    pub rank_per_round: Vec<u32>,
    pub times_ranked_first: u32,
    pub times_ranked_last: u32,
}

impl TeamMetrics {
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            total_score: 0.0,
            scores_per_round: Vec::new(),
            average_score: 0.0,
            score_trend: Trend::Stable,
            total_bugs: 0,
            bugs_per_round: Vec::new(),
            unique_bugs: 0,
            duplicate_bugs: 0,
            severity_counts: SeverityTable::default(),
            vuln_types: BTreeMap::new(),
            false_positives: 0,
            false_positive_rate: 0.0,
            quality_score_total: 0.0,
            quality_score_samples: 0,
            average_report_quality: 0.0,
            latency_per_round: Vec::new(),
            average_discovery_latency_secs: 0.0,
            rank_per_round: Vec::new(),
            times_ranked_first: 0,
            times_ranked_last: 0,
        }
    }

    pub fn rounds(&self) -> usize {
        self.scores_per_round.len()
    }

    pub fn critical_bugs(&self) -> u32 {
        self.severity_counts.critical
    }

    /// Last score minus first score; 0 before two rounds.
    pub fn improvement(&self) -> f64 {
        match (self.scores_per_round.first(), self.scores_per_round.last()) {
            (Some(first), Some(last)) if self.rounds() >= 2 => last - first,
            _ => 0.0,
        }
    }

    /// Improvement per round played.
    pub fn improvement_rate(&self) -> f64 {
        if self.rounds() < 2 {
            return 0.0;
        }
        self.improvement() / self.rounds() as f64
    }

    /// Fold one round's result into the running totals.
    pub(crate) fn absorb(&mut self, result: &TeamRoundResult) {
        self.total_score += result.score;
        self.scores_per_round.push(result.score);
        self.average_score = self.total_score / self.scores_per_round.len() as f64;

        let mut valid = 0u32;
        for f in result.valid_findings() {
            valid += 1;
            self.severity_counts.increment(f.severity());
            *self.vuln_types.entry(f.vuln_type().to_string()).or_insert(0) += 1;
            self.quality_score_total += f.quality_bonus;
            self.quality_score_samples += 1;
        }

        let unique = result.unique_discoveries as u32;
        self.total_bugs += valid;
        self.bugs_per_round.push(valid);
        self.unique_bugs += unique;
        self.duplicate_bugs += valid.saturating_sub(unique);

        self.false_positives += result.false_positives as u32;
        let reports = self.total_bugs + self.false_positives;
        if reports > 0 {
            self.false_positive_rate = self.false_positives as f64 / reports as f64;
        }

        if self.quality_score_samples > 0 {
            self.average_report_quality = self.quality_score_total / self.quality_score_samples as f64;
        }

        if let Some(latency) = result.avg_discovery_latency_secs {
            self.latency_per_round.push(latency);
            self.average_discovery_latency_secs =
                self.latency_per_round.iter().sum::<f64>() / self.latency_per_round.len() as f64;
        }
    }

    pub(crate) fn record_rank(&mut self, rank: u32, team_count: usize) {
        self.rank_per_round.push(rank);
        if rank == 1 {
            self.times_ranked_first += 1;
        } else if rank as usize == team_count {
            self.times_ranked_last += 1;
        }
    }

    pub(crate) fn refresh_trend(&mut self, config: &MetricsConfig) {
        self.score_trend = classify_trend(
            &self.scores_per_round,
            config.trend_slope_threshold,
            config.min_rounds_for_trend,
        );
    }
}
