//! Round-global deduplication and its tie-break.

use arena_core::{Finding, NewFinding, TeamId};
use arena_engine::dedup::{DuplicateSignature, RoundDeduplicator, SubmissionLog};
use chrono::Utc;

fn make_finding(team: &str, vuln_type: &str, location: &str, severity: &str) -> Finding {
    Finding::new(NewFinding {
        vuln_type: vuln_type.to_string(),
        location: location.to_string(),
        severity: severity.to_string(),
        cvss_score: 6.1,
        description: "Reflected XSS through the search parameter".to_string(),
        proof_of_concept: "<script>alert(1)</script>".to_string(),
        remediation: "Escape output".to_string(),
        discovered_at: Utc::now(),
        team_id: TeamId::from(team),
    })
    .unwrap()
}

#[test]
fn later_wave_loses_to_earlier_receipt() {
    let mut log = SubmissionLog::new();
    log.record(make_finding("zulu", "xss", "tpl.html:12", "medium"));
    log.record_concurrent(vec![
        vec![make_finding("alpha", "xss", "tpl.html:12", "medium")],
        vec![make_finding("bravo", "xss", "tpl.html:12", "medium")],
    ]);

    let outcome = RoundDeduplicator::new().mark(log);
    let unique: Vec<&str> = outcome
        .findings
        .iter()
        .filter(|m| m.is_unique)
        .map(|m| m.finding.team_id().as_str())
        .collect();
    assert_eq!(unique, vec!["zulu"]);
    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].size, 3);
    assert_eq!(outcome.groups[0].first_team.as_str(), "zulu");
}

#[test]
fn concurrent_wave_breaks_ties_by_team_id() {
    let mut log = SubmissionLog::new();
    log.record_concurrent(vec![
        vec![make_finding("charlie", "xss", "tpl.html:12", "medium")],
        vec![make_finding("alpha", "xss", "tpl.html:12", "medium")],
    ]);

    let outcome = RoundDeduplicator::new().mark(log);
    assert_eq!(outcome.findings[0].finding.team_id().as_str(), "alpha");
    assert!(outcome.findings[0].is_unique);
    assert!(!outcome.findings[1].is_unique);
}

#[test]
fn severity_is_part_of_the_signature() {
    let mut log = SubmissionLog::new();
    log.record(make_finding("alpha", "xss", "tpl.html:12", "medium"));
    log.record(make_finding("bravo", "xss", "tpl.html:12", "high"));
    log.record(make_finding("bravo", "xss", "tpl.html:13", "medium"));

    let outcome = RoundDeduplicator::new().mark(log);
    assert_eq!(outcome.unique_count(), 3);
    assert!(outcome.groups.is_empty());
}

#[test]
fn every_duplicate_group_has_exactly_one_unique() {
    let mut log = SubmissionLog::new();
    for team in ["delta", "alpha", "charlie", "bravo"] {
        log.record(make_finding(team, "sqli", "db.rs:7", "critical"));
        log.record(make_finding(team, "csrf", "form.rs:3", "low"));
    }

    let outcome = RoundDeduplicator::new().mark(log);
    for group in &outcome.groups {
        let uniques = outcome
            .findings
            .iter()
            .filter(|m| DuplicateSignature::of(&m.finding) == group.signature && m.is_unique)
            .count();
        assert_eq!(uniques, 1);
        assert_eq!(group.first_team.as_str(), "delta");
    }
    assert_eq!(outcome.groups.len(), 2);
}
