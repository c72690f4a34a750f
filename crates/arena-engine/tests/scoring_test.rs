//! Scoring engine: worked examples and bonus bands.

use arena_core::{Finding, NewFinding, TeamId};
use arena_engine::dedup::{MarkedFinding, RoundDeduplicator, SubmissionLog};
use arena_engine::scoring::{RoundContext, ScoringEngine};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn round_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn make_finding(team: &str, severity: &str, cvss: f64, minutes: i64) -> NewFinding {
    NewFinding {
        vuln_type: "sql_injection".to_string(),
        location: "api/users.rs:42".to_string(),
        severity: severity.to_string(),
        cvss_score: cvss,
        description: "x".repeat(60),
        proof_of_concept: "y".repeat(40),
        remediation: "z".repeat(40),
        discovered_at: round_start() + Duration::minutes(minutes),
        team_id: TeamId::from(team),
    }
}

fn marked(input: NewFinding, is_unique: bool) -> MarkedFinding {
    MarkedFinding {
        finding: Finding::new(input).unwrap(),
        is_unique,
        order: 0,
    }
}

#[test]
fn critical_unique_fast_finding_scores_340() {
    let engine = ScoringEngine::default();
    let ctx = RoundContext::new(1, round_start());
    let scored = engine.evaluate(marked(make_finding("alpha", "critical", 9.8, 2), true), &ctx);

    assert!(!scored.is_false_positive);
    assert_eq!(scored.base_points, 100.0);
    assert_eq!(scored.cvss_multiplier, 2.0);
    assert_eq!(scored.cvss_points, 200.0);
    assert_eq!(scored.uniqueness_bonus, 100.0);
    assert_eq!(scored.quality_bonus, 20.0);
    assert_eq!(scored.speed_bonus, 20.0);
    assert_eq!(scored.total_score, 340.0);
}

#[test]
fn thin_report_is_false_positive_at_minus_twenty() {
    let engine = ScoringEngine::default();
    let ctx = RoundContext::new(1, round_start());
    let mut input = make_finding("alpha", "high", 0.0, 1);
    input.description = "short".to_string();
    input.proof_of_concept = "ab".to_string();
    input.location = String::new();

    let scored = engine.evaluate(marked(input, true), &ctx);
    assert!(scored.is_false_positive);
    assert_eq!(scored.false_positive_indicators, 4);
    assert_eq!(scored.total_score, -20.0);
    assert_eq!(scored.uniqueness_bonus, 0.0);
    assert_eq!(scored.quality_bonus, 0.0);
    assert_eq!(scored.speed_bonus, 0.0);
}

#[test]
fn single_indicator_is_not_a_false_positive() {
    let engine = ScoringEngine::default();
    let ctx = RoundContext::new(1, round_start());
    let mut input = make_finding("alpha", "low", 2.0, 1);
    input.description = "tiny".to_string();

    let scored = engine.evaluate(marked(input, false), &ctx);
    assert!(!scored.is_false_positive);
    assert_eq!(scored.false_positive_indicators, 1);
}

#[test]
fn duplicate_scores_exactly_half_cvss_points_less() {
    let mut log = SubmissionLog::new();
    for team in ["alpha", "bravo"] {
        let mut input = make_finding(team, "medium", 5.0, 10);
        input.vuln_type = "xss".to_string();
        input.location = "tpl.html:12".to_string();
        log.record(Finding::new(input).unwrap());
    }

    let outcome = RoundDeduplicator::new().mark(log);
    let engine = ScoringEngine::default();
    let scored = engine.evaluate_all(outcome.findings, &RoundContext::new(1, round_start()));

    let first = &scored[0];
    let second = &scored[1];
    assert_eq!(first.finding.team_id().as_str(), "alpha");
    assert!(first.is_unique);
    assert!(!second.is_unique);
    assert_eq!(first.cvss_points, 30.0);
    assert_eq!(first.total_score - second.total_score, first.cvss_points * 0.5);
}

#[test]
fn speed_bonus_follows_elapsed_minutes() {
    let engine = ScoringEngine::default();
    let ctx = RoundContext::new(1, round_start());
    let bonus = |minutes| {
        engine
            .evaluate(marked(make_finding("alpha", "low", 2.0, minutes), false), &ctx)
            .speed_bonus
    };
    assert_eq!(bonus(4), 20.0);
    assert_eq!(bonus(5), 10.0);
    assert_eq!(bonus(14), 10.0);
    assert_eq!(bonus(29), 5.0);
    assert_eq!(bonus(30), 0.0);
    // Stamped before the round started.
    assert_eq!(bonus(-10), 20.0);
}

#[test]
fn quality_tiers_sum_and_cap() {
    let engine = ScoringEngine::default();
    let ctx = RoundContext::new(1, round_start());
    let mut input = make_finding("alpha", "low", 2.0, 60);
    input.description = "d".repeat(25);
    input.proof_of_concept = "p".repeat(12);
    input.remediation = String::new();

    let scored = engine.evaluate(marked(input, false), &ctx);
    assert_eq!(scored.quality_bonus, 8.0);
    assert_eq!(scored.total_score, 10.0 + 8.0);
}

#[test]
fn scoring_tables_come_from_config() {
    let config = arena_core::ArenaConfig::from_toml(
        r#"
        [scoring.severity_points]
        critical = 1000.0
        high = 50.0
        medium = 25.0
        low = 10.0
        info = 5.0
        "#,
    )
    .unwrap();
    let engine = ScoringEngine::new(config.scoring);
    let ctx = RoundContext::new(1, round_start());
    let scored = engine.evaluate(marked(make_finding("alpha", "critical", 9.0, 60), false), &ctx);
    assert_eq!(scored.cvss_points, 2000.0);
}
