//! On-demand cross-team analysis: specialists, winner, most improved, leaderboard.
//!
//! Every selection walks teams in ascending id order and only replaces the
//! current pick on a strictly better value, so ties go to the lower id.

use std::collections::BTreeMap;

use arena_core::TeamId;
use serde::{Deserialize, Serialize};

use super::team_metrics::TeamMetrics;
use super::trend::Trend;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistAward {
    pub team_id: TeamId,
    pub team_name: String,
    pub value: f64,
}

impl SpecialistAward {
    fn new(team: &TeamMetrics, value: f64) -> Self {
        Self {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specialists {
    /// Most critical findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_hunter: Option<SpecialistAward>,
    /// Lowest false-positive rate among teams with a valid finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_accurate: Option<SpecialistAward>,
    /// Most unique discoveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_coverage: Option<SpecialistAward>,
    /// Highest average report quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_reporter: Option<SpecialistAward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallWinner {
    pub team_id: TeamId,
    pub team_name: String,
    pub total_score: f64,
    pub total_bugs: u32,
    pub critical_bugs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostImproved {
    pub team_id: TeamId,
    pub team_name: String,
    pub trend: Trend,
    pub improvement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub average_score: f64,
    pub total_bugs_found: u32,
    pub average_bugs_per_team: f64,
    pub total_rounds: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub score: f64,
    pub bugs: u32,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    pub overall_winner: OverallWinner,
    pub specialists: Specialists,
    pub most_improved: Option<MostImproved>,
    pub statistics: AggregateStatistics,
    pub leaderboard: Vec<LeaderboardEntry>,
}

pub(crate) fn select_max<'a, I, F>(teams: I, key: F) -> Option<(&'a TeamMetrics, f64)>
where
    I: IntoIterator<Item = &'a TeamMetrics>,
    F: Fn(&TeamMetrics) -> f64,
{
    let mut best: Option<(&TeamMetrics, f64)> = None;
    for team in teams {
        let value = key(team);
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((team, value));
        }
    }
    best
}

fn select_min<'a, I, F>(teams: I, key: F) -> Option<(&'a TeamMetrics, f64)>
where
    I: IntoIterator<Item = &'a TeamMetrics>,
    F: Fn(&TeamMetrics) -> f64,
{
    select_max(teams, |t| -key(t)).map(|(t, v)| (t, -v))
}

fn award(pick: Option<(&TeamMetrics, f64)>) -> Option<SpecialistAward> {
    pick.map(|(t, v)| SpecialistAward::new(t, v))
}

pub(crate) fn specialists(teams: &BTreeMap<TeamId, TeamMetrics>) -> Specialists {
    Specialists {
        critical_hunter: award(select_max(teams.values(), |t| t.critical_bugs() as f64)),
        most_accurate: award(select_min(
            teams.values().filter(|t| t.total_bugs > 0),
            |t| t.false_positive_rate,
        )),
        best_coverage: award(select_max(teams.values(), |t| t.unique_bugs as f64)),
        best_reporter: award(select_max(teams.values(), |t| t.average_report_quality)),
    }
}

impl LeaderboardEntry {
    pub(crate) fn new(rank: u32, team: &TeamMetrics) -> Self {
        Self {
            rank,
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            score: team.total_score,
            bugs: team.total_bugs,
            trend: team.score_trend,
        }
    }
}

impl OverallWinner {
    pub(crate) fn new(team: &TeamMetrics) -> Self {
        Self {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            total_score: team.total_score,
            total_bugs: team.total_bugs,
            critical_bugs: team.critical_bugs(),
        }
    }
}

impl MostImproved {
    pub(crate) fn new(team: &TeamMetrics) -> Self {
        Self {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            trend: team.score_trend,
            improvement: team.improvement(),
        }
    }
}

impl AggregateStatistics {
    pub(crate) fn from_teams(teams: &BTreeMap<TeamId, TeamMetrics>, total_rounds: usize) -> Self {
        let count = teams.len();
        let total_score: f64 = teams.values().map(|t| t.total_score).sum();
        let total_bugs_found: u32 = teams.values().map(|t| t.total_bugs).sum();
        let (average_score, average_bugs_per_team) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_score / count as f64, total_bugs_found as f64 / count as f64)
        };
        Self {
            average_score,
            total_bugs_found,
            average_bugs_per_team,
            total_rounds,
        }
    }
}
