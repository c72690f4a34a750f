//! RoundRecord: the immutable result of one closed round.

use std::collections::BTreeMap;

use arena_core::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{RoundContext, ScoredFinding, Scorecard};

/// One team's results for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRoundResult {
    pub team_id: TeamId,
    pub team_name: String,
    pub findings: Vec<ScoredFinding>,
    /// Sum of every finding's total score, false positives included.
    pub score: f64,
    pub false_positives: usize,
    /// Valid findings that were the round's first report of their signature.
    pub unique_discoveries: usize,
    /// Mean seconds from round start to discovery over valid findings.
    /// `None` when the team reported no valid finding.
    pub avg_discovery_latency_secs: Option<f64>,
}

impl TeamRoundResult {
    pub fn from_scored(
        team_id: TeamId,
        team_name: impl Into<String>,
        findings: Vec<ScoredFinding>,
        ctx: &RoundContext,
    ) -> Self {
        let score = findings.iter().map(|f| f.total_score).sum();
        let false_positives = findings.iter().filter(|f| f.is_false_positive).count();
        let unique_discoveries = findings.iter().filter(|f| f.is_valid() && f.is_unique).count();

        let latencies: Vec<f64> = findings
            .iter()
            .filter(|f| f.is_valid())
            .map(|f| ctx.elapsed_minutes(&f.finding) * 60.0)
            .collect();
        let avg_discovery_latency_secs = if latencies.is_empty() {
            None
        } else {
            Some(latencies.iter().sum::<f64>() / latencies.len() as f64)
        };

        Self {
            team_id,
            team_name: team_name.into(),
            findings,
            score,
            false_positives,
            unique_discoveries,
            avg_discovery_latency_secs,
        }
    }

    pub fn valid_findings(&self) -> impl Iterator<Item = &ScoredFinding> + '_ {
        self.findings.iter().filter(|f| f.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.valid_findings().count()
    }

    pub fn scorecard(&self, top_n: usize) -> Scorecard {
        Scorecard::from_findings(&self.findings, top_n)
    }
}

/// All teams' results for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub started_at: DateTime<Utc>,
    pub teams: BTreeMap<TeamId, TeamRoundResult>,
}

impl RoundRecord {
    pub fn context(&self) -> RoundContext {
        RoundContext::new(self.round_number, self.started_at)
    }

    pub fn total_findings(&self) -> usize {
        self.teams.values().map(|t| t.findings.len()).sum()
    }

    pub fn team(&self, team_id: &TeamId) -> Option<&TeamRoundResult> {
        self.teams.get(team_id)
    }
}
