//! The metrics export document.

use std::collections::BTreeMap;

use arena_core::TeamId;
use serde::{Deserialize, Serialize};

use crate::metrics::{ComparativeAnalysis, MetricsTracker, TeamMetrics, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamExport {
    pub name: String,
    pub total_score: f64,
    pub scores_per_round: Vec<f64>,
    pub total_bugs: u32,
    pub bugs_per_round: Vec<u32>,
    pub severity_breakdown: SeverityBreakdown,
    pub false_positive_rate: f64,
    pub unique_bugs: u32,
    pub vuln_type_histogram: BTreeMap<String, u32>,
    pub score_trend: Trend,
    pub rank_per_round: Vec<u32>,
}

impl From<&TeamMetrics> for TeamExport {
    fn from(m: &TeamMetrics) -> Self {
        Self {
            name: m.team_name.clone(),
            total_score: m.total_score,
            scores_per_round: m.scores_per_round.clone(),
            total_bugs: m.total_bugs,
            bugs_per_round: m.bugs_per_round.clone(),
            severity_breakdown: SeverityBreakdown {
                critical: m.severity_counts.critical,
                high: m.severity_counts.high,
                medium: m.severity_counts.medium,
                low: m.severity_counts.low,
            },
            false_positive_rate: m.false_positive_rate,
            unique_bugs: m.unique_bugs,
            vuln_type_histogram: m.vuln_types.clone(),
            score_trend: m.score_trend,
            rank_per_round: m.rank_per_round.clone(),
        }
    }
}

/// Teams keyed by id (ascending) plus the cross-team analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub teams: BTreeMap<TeamId, TeamExport>,
    pub comparative_analysis: Option<ComparativeAnalysis>,
}

impl ExportDocument {
    pub fn from_tracker(tracker: &MetricsTracker) -> Self {
        Self {
            teams: tracker
                .teams()
                .iter()
                .map(|(id, m)| (id.clone(), TeamExport::from(m)))
                .collect(),
            comparative_analysis: tracker.comparative_analysis(),
        }
    }
}
