//! Championship: in-process coordinator for the per-round data flow.
//!
//! submissions → dedup → scoring → round record → metrics → adaptation → export

use std::collections::BTreeMap;
use std::mem;

use arena_core::errors::ConfigResult;
use arena_core::{ArenaConfig, Finding, StrategyWeights, TeamId};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::record::{RoundRecord, TeamRoundResult};
use crate::adaptation::{
    recommend, AdaptiveExploration, BanditAdapter, LearningSnapshot, Recommendation, WeightChange,
};
use crate::dedup::{DuplicateGroup, RoundDeduplicator, SubmissionLog};
use crate::export::{try_export, ExportDocument};
use crate::metrics::MetricsTracker;
use crate::scoring::{RoundContext, ScoredFinding, Scorecard, ScoringEngine};

#[derive(Debug)]
struct TeamEntry {
    name: String,
    weights: StrategyWeights,
    adapter: BanditAdapter,
    schedule: Option<AdaptiveExploration>,
}

/// Everything a closed round produced.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub round_number: u32,
    pub record: RoundRecord,
    /// Next round's weights per team.
    pub weights: BTreeMap<TeamId, StrategyWeights>,
    pub changes: BTreeMap<TeamId, Vec<WeightChange>>,
    pub duplicate_groups: Vec<DuplicateGroup>,
    /// Non-fatal problems (export failures).
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct Championship {
    config: ArenaConfig,
    scorer: ScoringEngine,
    dedup: RoundDeduplicator,
    tracker: MetricsTracker,
    teams: BTreeMap<TeamId, TeamEntry>,
    submissions: SubmissionLog,
    rounds: Vec<RoundRecord>,
    warnings: Vec<String>,
}

/// Per-team stream derived from the configured seed so teams explore
/// independently but reproducibly.
fn team_seed(seed: u64, team_id: &TeamId) -> u64 {
    let hash = blake3::hash(team_id.as_str().as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    seed ^ u64::from_le_bytes(head)
}

impl Championship {
    /// Build a coordinator from a validated config.
    pub fn new(config: ArenaConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            scorer: ScoringEngine::new(config.scoring.clone()),
            dedup: RoundDeduplicator::new(),
            tracker: MetricsTracker::new(config.metrics.clone()),
            config,
            teams: BTreeMap::new(),
            submissions: SubmissionLog::new(),
            rounds: Vec::new(),
            warnings: Vec::new(),
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Register a team with its starting weights. Re-registering replaces
    /// the name and weights but keeps the learned history.
    pub fn register_team(
        &mut self,
        team_id: TeamId,
        team_name: impl Into<String>,
        weights: StrategyWeights,
    ) {
        let team_name = team_name.into();
        self.tracker.register_team(team_id.clone(), team_name.clone());

        if let Some(entry) = self.teams.get_mut(&team_id) {
            entry.name = team_name;
            entry.weights = weights;
            return;
        }

        let mut adaptation = self.config.adaptation.clone();
        adaptation.seed = adaptation.seed.map(|s| team_seed(s, &team_id));
        let schedule = adaptation.schedule.clone().map(AdaptiveExploration::new);
        let mut adapter = BanditAdapter::from_config(adaptation);
        if let Some(schedule) = &schedule {
            adapter.set_exploration_rate(schedule.rate());
        }

        self.teams.insert(
            team_id,
            TeamEntry {
                name: team_name,
                weights,
                adapter,
                schedule,
            },
        );
    }

    /// The current round's submission log.
    pub fn submissions_mut(&mut self) -> &mut SubmissionLog {
        &mut self.submissions
    }

    /// Record one finding for the current round.
    pub fn submit(&mut self, finding: Finding) -> u64 {
        self.submissions.record(finding)
    }

    /// Number the next call to `close_round` will assign.
    pub fn current_round(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    pub fn weights(&self, team_id: &TeamId) -> Option<&StrategyWeights> {
        self.teams.get(team_id).map(|t| &t.weights)
    }

    pub fn adapter(&self, team_id: &TeamId) -> Option<&BanditAdapter> {
        self.teams.get(team_id).map(|t| &t.adapter)
    }

    pub fn team_ids(&self) -> impl Iterator<Item = &TeamId> + '_ {
        self.teams.keys()
    }

    pub fn recommendations(&self, team_id: &TeamId) -> Option<Vec<Recommendation>> {
        let entry = self.teams.get(team_id)?;
        let history = self
            .tracker
            .team(team_id)
            .map(|m| m.scores_per_round.as_slice())
            .unwrap_or(&[]);
        Some(recommend(&entry.weights, history, &entry.adapter))
    }

    pub fn learning_snapshots(&self) -> BTreeMap<TeamId, LearningSnapshot> {
        self.teams
            .iter()
            .map(|(id, t)| (id.clone(), t.adapter.snapshot()))
            .collect()
    }

    /// Scorecard for a team's most recent round, listing the configured
    /// `metrics.top_n` findings.
    pub fn scorecard(&self, team_id: &TeamId) -> Option<Scorecard> {
        let result = self.rounds.last()?.team(team_id)?;
        Some(result.scorecard(self.config.metrics.top_n))
    }

    pub fn tracker(&self) -> &MetricsTracker {
        &self.tracker
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Every warning raised so far, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Close the current round: deduplicate all teams' submissions, score
    /// them, record metrics, adapt each team's weights, and export.
    pub fn close_round(&mut self, started_at: DateTime<Utc>) -> RoundOutcome {
        let round_number = self.current_round();
        let ctx = RoundContext::new(round_number, started_at);
        let log = mem::take(&mut self.submissions);

        let unknown: Vec<TeamId> = log
            .iter()
            .map(|s| s.team_id())
            .filter(|id| !self.teams.contains_key(*id))
            .cloned()
            .collect();
        for team_id in unknown {
            if self.teams.contains_key(&team_id) {
                continue;
            }
            warn!(team = %team_id, round = round_number, "Findings from unregistered team; registering");
            let name = team_id.to_string();
            self.register_team(team_id, name, StrategyWeights::new());
        }

        let dedup = self.dedup.mark(log);
        let duplicate_groups = dedup.groups;
        let scored = self.scorer.evaluate_all(dedup.findings, &ctx);

        let mut by_team: BTreeMap<TeamId, Vec<ScoredFinding>> =
            self.teams.keys().map(|id| (id.clone(), Vec::new())).collect();
        for finding in scored {
            by_team
                .entry(finding.finding.team_id().clone())
                .or_default()
                .push(finding);
        }

        let teams: BTreeMap<TeamId, TeamRoundResult> = by_team
            .into_iter()
            .map(|(id, findings)| {
                let name = self
                    .teams
                    .get(&id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| id.to_string());
                let result = TeamRoundResult::from_scored(id.clone(), name, findings, &ctx);
                (id, result)
            })
            .collect();
        let record = RoundRecord {
            round_number,
            started_at,
            teams,
        };

        self.tracker.record_round(&record);

        let mut weights = BTreeMap::new();
        let mut changes = BTreeMap::new();
        for (team_id, entry) in self.teams.iter_mut() {
            let Some(result) = record.teams.get(team_id) else {
                continue;
            };
            if let Some(schedule) = entry.schedule.as_mut() {
                let rate = schedule.record(result.score);
                entry.adapter.set_exploration_rate(rate);
            }
            let current = mem::take(&mut entry.weights);
            let report = entry.adapter.update_detailed(
                current,
                &result.findings,
                result.score,
                result.false_positives,
            );
            entry.weights = report.weights;
            weights.insert(team_id.clone(), entry.weights.clone());
            changes.insert(team_id.clone(), report.changes);
        }

        info!(
            round = round_number,
            teams = record.teams.len(),
            findings = record.total_findings(),
            duplicate_groups = duplicate_groups.len(),
            "Round closed"
        );

        let warnings = self.export();
        self.warnings.extend(warnings.iter().cloned());
        self.rounds.push(record.clone());

        RoundOutcome {
            round_number,
            record,
            weights,
            changes,
            duplicate_groups,
            warnings,
        }
    }

    fn export(&self) -> Vec<String> {
        let pretty = self.config.export.pretty;
        let mut warnings = Vec::new();
        if let Some(path) = &self.config.export.metrics_path {
            let document = ExportDocument::from_tracker(&self.tracker);
            warnings.extend(try_export("metrics", path, &document, pretty));
        }
        if let Some(path) = &self.config.export.learning_path {
            warnings.extend(try_export("learning", path, &self.learning_snapshots(), pretty));
        }
        warnings
    }
}
