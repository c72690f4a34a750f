//! MetricsTracker: ingests closed rounds and maintains cumulative team state.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use arena_core::config::MetricsConfig;
use arena_core::TeamId;
use tracing::debug;

use super::analysis::{
    self, AggregateStatistics, ComparativeAnalysis, LeaderboardEntry, MostImproved, OverallWinner,
    Specialists,
};
use super::ranking::{rank_by_score, RoundRanking};
use super::team_metrics::TeamMetrics;
use super::trend::Trend;
use crate::round::RoundRecord;

#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    config: MetricsConfig,
    teams: BTreeMap<TeamId, TeamMetrics>,
    rankings: Vec<RoundRanking>,
}

impl MetricsTracker {
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            teams: BTreeMap::new(),
            rankings: Vec::new(),
        }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Start tracking a team before its first round. A known team keeps
    /// its history and takes the new name.
    pub fn register_team(&mut self, team_id: TeamId, team_name: impl Into<String>) {
        let team_name = team_name.into();
        match self.teams.entry(team_id) {
            Entry::Occupied(mut entry) => entry.get_mut().team_name = team_name,
            Entry::Vacant(entry) => {
                let team_id = entry.key().clone();
                entry.insert(TeamMetrics::new(team_id, team_name));
            }
        }
    }

    /// Rank the round, fold every team's result into its cumulative state,
    /// and refresh all trends.
    pub fn record_round(&mut self, record: &RoundRecord) -> &RoundRanking {
        let ranks: Vec<(TeamId, u32)> =
            rank_by_score(record.teams.iter().map(|(id, r)| (id, r.score)))
                .into_iter()
                .map(|(id, rank)| (id.clone(), rank))
                .collect();
        let team_count = record.teams.len();

        for (team_id, rank) in &ranks {
            let Some(result) = record.teams.get(team_id) else {
                continue;
            };
            let metrics = self
                .teams
                .entry(team_id.clone())
                .or_insert_with(|| TeamMetrics::new(team_id.clone(), result.team_name.clone()));
            metrics.absorb(result);
            metrics.record_rank(*rank, team_count);
        }

        for metrics in self.teams.values_mut() {
            metrics.refresh_trend(&self.config);
        }

        debug!(
            round = record.round_number,
            teams = team_count,
            "Round metrics recorded"
        );

        let idx = self.rankings.len();
        self.rankings.push(RoundRanking {
            round_number: record.round_number,
            ranks,
        });
        &self.rankings[idx]
    }

    pub fn team(&self, team_id: &TeamId) -> Option<&TeamMetrics> {
        self.teams.get(team_id)
    }

    /// All tracked teams, ascending by id.
    pub fn teams(&self) -> &BTreeMap<TeamId, TeamMetrics> {
        &self.teams
    }

    pub fn rounds_recorded(&self) -> usize {
        self.rankings.len()
    }

    pub fn round_rankings(&self) -> &[RoundRanking] {
        &self.rankings
    }

    /// Teams by total score descending, team id ascending on ties.
    pub fn leaderboard(&self) -> Vec<&TeamMetrics> {
        rank_by_score(self.teams.iter().map(|(id, m)| (id, m.total_score)))
            .into_iter()
            .filter_map(|(id, _)| self.teams.get(id))
            .collect()
    }

    pub fn best_team(&self) -> Option<&TeamMetrics> {
        self.leaderboard().into_iter().next()
    }

    /// The improving team with the best per-round improvement.
    pub fn most_improved(&self) -> Option<&TeamMetrics> {
        let improving = self.teams.values().filter(|t| t.score_trend == Trend::Improving);
        analysis::select_max(improving, TeamMetrics::improvement_rate).map(|(t, _)| t)
    }

    pub fn specialists(&self) -> Specialists {
        analysis::specialists(&self.teams)
    }

    /// `None` until at least one team is tracked.
    pub fn comparative_analysis(&self) -> Option<ComparativeAnalysis> {
        let leaderboard = self.leaderboard();
        let winner = leaderboard.first()?;
        Some(ComparativeAnalysis {
            overall_winner: OverallWinner::new(winner),
            specialists: self.specialists(),
            most_improved: self.most_improved().map(MostImproved::new),
            statistics: AggregateStatistics::from_teams(&self.teams, self.rounds_recorded()),
            leaderboard: leaderboard
                .iter()
                .enumerate()
                .map(|(i, t)| LeaderboardEntry::new(i as u32 + 1, t))
                .collect(),
        })
    }
}
