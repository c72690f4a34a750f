//! Finding: one reported issue, validated at construction and immutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::TeamId;
use super::severity::Severity;
use crate::constants::{CVSS_MAX, CVSS_MIN};
use crate::errors::{FindingError, FindingResult};

/// Raw producer input for a finding. Unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFinding {
    pub vuln_type: String,
    pub location: String,
    pub severity: String,
    pub cvss_score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub proof_of_concept: String,
    #[serde(default)]
    pub remediation: String,
    pub discovered_at: DateTime<Utc>,
    pub team_id: TeamId,
}

/// A validated finding.
///
/// Severity is one of the five recognized bands and the CVSS score lies in
/// [0, 10]. Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewFinding")]
pub struct Finding {
    vuln_type: String,
    location: String,
    severity: Severity,
    cvss_score: f64,
    description: String,
    proof_of_concept: String,
    remediation: String,
    discovered_at: DateTime<Utc>,
    team_id: TeamId,
}

impl Finding {
    pub fn new(input: NewFinding) -> FindingResult<Self> {
        let severity = Severity::parse(&input.severity)?;

        // NaN fails both comparisons and is rejected here.
        if !(input.cvss_score >= CVSS_MIN && input.cvss_score <= CVSS_MAX) {
            return Err(FindingError::CvssOutOfRange {
                value: input.cvss_score,
            });
        }
        if input.vuln_type.trim().is_empty() {
            return Err(FindingError::EmptyVulnType);
        }
        if input.team_id.is_empty() {
            return Err(FindingError::EmptyTeamId);
        }

        Ok(Self {
            vuln_type: input.vuln_type,
            location: input.location,
            severity,
            cvss_score: input.cvss_score,
            description: input.description,
            proof_of_concept: input.proof_of_concept,
            remediation: input.remediation,
            discovered_at: input.discovered_at,
            team_id: input.team_id,
        })
    }

    pub fn vuln_type(&self) -> &str {
        &self.vuln_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn cvss_score(&self) -> f64 {
        self.cvss_score
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn proof_of_concept(&self) -> &str {
        &self.proof_of_concept
    }

    pub fn remediation(&self) -> &str {
        &self.remediation
    }

    pub fn discovered_at(&self) -> DateTime<Utc> {
        self.discovered_at
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }
}

impl TryFrom<NewFinding> for Finding {
    type Error = FindingError;

    fn try_from(input: NewFinding) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}
