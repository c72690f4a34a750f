//! Scorecard: summary of a set of scored findings (one team, one round).

use arena_core::{Severity, SeverityTable};
use serde::Serialize;

use super::engine::ScoredFinding;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopFinding {
    pub vuln_type: String,
    pub severity: Severity,
    pub score: f64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub total_findings: usize,
    pub valid_findings: usize,
    pub false_positives: usize,
    pub total_score: f64,
    /// Valid findings only.
    pub severity_distribution: SeverityTable<u32>,
    pub top_findings: Vec<TopFinding>,
    /// Mean CVSS of valid findings; 0 when there are none.
    pub average_cvss: f64,
    pub unique_discoveries: usize,
    /// False positives over all findings; 0 when there are none.
    pub false_positive_rate: f64,
}

impl Scorecard {
    pub fn from_findings(findings: &[ScoredFinding], top_n: usize) -> Self {
        let valid: Vec<&ScoredFinding> = findings.iter().filter(|f| f.is_valid()).collect();
        let false_positives = findings.len() - valid.len();

        let mut severity_distribution = SeverityTable::<u32>::default();
        for f in &valid {
            severity_distribution.increment(f.severity());
        }

        // Stable sort keeps submission order among equal scores.
        let mut ranked = valid.clone();
        ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        let top_findings = ranked
            .into_iter()
            .take(top_n)
            .map(|f| TopFinding {
                vuln_type: f.vuln_type().to_string(),
                severity: f.severity(),
                score: f.total_score,
                location: f.finding.location().to_string(),
            })
            .collect();

        let average_cvss = if valid.is_empty() {
            0.0
        } else {
            valid.iter().map(|f| f.finding.cvss_score()).sum::<f64>() / valid.len() as f64
        };

        let false_positive_rate = if findings.is_empty() {
            0.0
        } else {
            false_positives as f64 / findings.len() as f64
        };

        Self {
            total_findings: findings.len(),
            valid_findings: valid.len(),
            false_positives,
            total_score: findings.iter().map(|f| f.total_score).sum(),
            severity_distribution,
            top_findings,
            average_cvss,
            unique_discoveries: valid.iter().filter(|f| f.is_unique).count(),
            false_positive_rate,
        }
    }
}
