//! False-positive screen.
//!
//! Indicators: short description, short proof of concept, CVSS of exactly
//! zero, empty location. Two or more flag the finding.

use arena_core::config::ScoringConfig;
use arena_core::Finding;

/// Count the false-positive indicators that hold for a finding.
pub fn count_indicators(finding: &Finding, config: &ScoringConfig) -> usize {
    [
        finding.description().chars().count() < config.min_description_chars,
        finding.proof_of_concept().chars().count() < config.min_poc_chars,
        finding.cvss_score() == 0.0,
        finding.location().is_empty(),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{NewFinding, TeamId};
    use chrono::Utc;

    fn finding(description: &str, poc: &str, cvss: f64, location: &str) -> Finding {
        Finding::new(NewFinding {
            vuln_type: "xss".to_string(),
            location: location.to_string(),
            severity: "low".to_string(),
            cvss_score: cvss,
            description: description.to_string(),
            proof_of_concept: poc.to_string(),
            remediation: String::new(),
            discovered_at: Utc::now(),
            team_id: TeamId::from("team1"),
        })
        .unwrap()
    }

    #[test]
    fn test_clean_report_has_no_indicators() {
        let f = finding("Reflected XSS in search box", "<script>", 6.1, "search.html:4");
        assert_eq!(count_indicators(&f, &ScoringConfig::default()), 0);
    }

    #[test]
    fn test_all_four_indicators() {
        let f = finding("short", "ab", 0.0, "");
        assert_eq!(count_indicators(&f, &ScoringConfig::default()), 4);
    }

    #[test]
    fn test_thresholds_are_strict_less_than() {
        // 10-char description and 5-char PoC are not indicators.
        let f = finding("0123456789", "01234", 3.0, "a.rs:1");
        assert_eq!(count_indicators(&f, &ScoringConfig::default()), 0);
    }
}
