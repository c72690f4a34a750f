//! Property tests for scoring, dedup, adaptation and ranking invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;

use arena_core::config::{AdaptationConfig, MetricsConfig};
use arena_core::{Finding, NewFinding, StrategyWeights, TeamId};
use arena_engine::adaptation::BanditAdapter;
use arena_engine::dedup::{DuplicateSignature, MarkedFinding, RoundDeduplicator, SubmissionLog};
use arena_engine::metrics::{classify_trend, MetricsTracker, Trend};
use arena_engine::round::{RoundRecord, TeamRoundResult};
use arena_engine::scoring::{RoundContext, ScoringEngine};
use arena_engine::WeightAdapter;
use chrono::{Duration, TimeZone, Utc};

const TEAMS: [&str; 4] = ["alpha", "bravo", "charlie", "delta"];
const TYPES: [&str; 3] = ["sql_injection", "xss", "csrf"];
const SEVERITIES: [&str; 5] = ["critical", "high", "medium", "low", "info"];

#[derive(Debug, Clone)]
struct Params {
    team: usize,
    vuln_type: usize,
    location: usize,
    severity: usize,
    cvss: f64,
    description: usize,
    poc: usize,
    remediation: usize,
    minutes: i64,
}

fn params_strategy() -> impl Strategy<Value = Params> {
    (
        0..TEAMS.len(),
        0..TYPES.len(),
        0usize..3,
        0..SEVERITIES.len(),
        0.0f64..=10.0,
        0usize..80,
        0usize..40,
        0usize..40,
        -5i64..60,
    )
        .prop_map(
            |(team, vuln_type, location, severity, cvss, description, poc, remediation, minutes)| Params {
                team,
                vuln_type,
                location,
                severity,
                cvss,
                description,
                poc,
                remediation,
                minutes,
            },
        )
}

fn build(params: &Params) -> Finding {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let location = if params.location == 0 {
        String::new()
    } else {
        format!("file{}.rs:{}", params.location, params.location * 10)
    };
    Finding::new(NewFinding {
        vuln_type: TYPES[params.vuln_type].to_string(),
        location,
        severity: SEVERITIES[params.severity].to_string(),
        cvss_score: params.cvss,
        description: "d".repeat(params.description),
        proof_of_concept: "p".repeat(params.poc),
        remediation: "r".repeat(params.remediation),
        discovered_at: start + Duration::minutes(params.minutes),
        team_id: TeamId::from(TEAMS[params.team]),
    })
    .unwrap()
}

fn ctx() -> RoundContext {
    RoundContext::new(1, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
}

proptest! {
    #[test]
    fn prop_score_bounds(params in params_strategy(), unique in any::<bool>()) {
        let engine = ScoringEngine::default();
        let scored = engine.evaluate(
            MarkedFinding { finding: build(&params), is_unique: unique, order: 0 },
            &ctx(),
        );
        prop_assert!((0.0..=20.0).contains(&scored.quality_bonus));
        if scored.is_false_positive {
            prop_assert_eq!(scored.total_score, -20.0);
        } else {
            let floor = scored.base_points * scored.cvss_multiplier;
            prop_assert!(scored.total_score >= floor);
        }
    }
}

proptest! {
    #[test]
    fn prop_one_unique_per_signature(batch in prop::collection::vec(params_strategy(), 0..40)) {
        let mut log = SubmissionLog::new();
        for chunk in batch.chunks(3) {
            log.record_concurrent(vec![chunk.iter().map(build).collect::<Vec<_>>()]);
        }
        let outcome = RoundDeduplicator::new().mark(log);

        let mut uniques: BTreeMap<DuplicateSignature, usize> = BTreeMap::new();
        for m in &outcome.findings {
            let entry = uniques.entry(DuplicateSignature::of(&m.finding)).or_insert(0);
            if m.is_unique {
                *entry += 1;
            }
        }
        for count in uniques.values() {
            prop_assert_eq!(*count, 1);
        }
    }
}

proptest! {
    #[test]
    fn prop_weights_stay_bounded(
        batch in prop::collection::vec(params_strategy(), 0..30),
        start_weights in prop::collection::vec(-5.0f64..5.0, TYPES.len()),
        seed in any::<u64>(),
        rounds in 1usize..6,
    ) {
        let config = AdaptationConfig { exploration_rate: 0.5, ..AdaptationConfig::default() };
        let mut adapter = BanditAdapter::seeded(config, seed);
        let engine = ScoringEngine::default();
        let findings: Vec<_> = batch
            .iter()
            .map(|s| engine.evaluate(MarkedFinding { finding: build(s), is_unique: true, order: 0 }, &ctx()))
            .collect();

        let mut weights: StrategyWeights =
            TYPES.iter().copied().zip(start_weights.iter().copied()).collect();
        for _ in 0..rounds {
            weights = adapter.update(weights, &findings, 0.0, 0);
            prop_assert_eq!(weights.len(), TYPES.len());
            for (_, w) in weights.iter() {
                prop_assert!((0.1..=2.0).contains(&w));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_ranks_are_distinct(scores in prop::collection::vec(prop_oneof![Just(0.0), Just(50.0), -100.0f64..500.0], 1..TEAMS.len() + 1)) {
        let teams = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let id = TeamId::from(TEAMS[i]);
                let result = TeamRoundResult {
                    team_id: id.clone(),
                    team_name: TEAMS[i].to_string(),
                    findings: Vec::new(),
                    score: *score,
                    false_positives: 0,
                    unique_discoveries: 0,
                    avg_discovery_latency_secs: None,
                };
                (id, result)
            })
            .collect();
        let record = RoundRecord { round_number: 1, started_at: Utc::now(), teams };

        let mut tracker = MetricsTracker::new(MetricsConfig::default());
        let ranking = tracker.record_round(&record).clone();
        let mut ranks: Vec<u32> = ranking.ranks.iter().map(|(_, r)| *r).collect();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=scores.len() as u32).collect::<Vec<_>>());

        for team in tracker.teams().values() {
            prop_assert_eq!(team.score_trend, Trend::Stable);
        }
    }
}

proptest! {
    #[test]
    fn prop_short_series_is_stable(score in -1e6f64..1e6) {
        prop_assert_eq!(classify_trend(&[score], 5.0, 2), Trend::Stable);
    }
}
