//! Duplicate signature: (vulnerability type, location, severity).

use std::fmt;

use arena_core::{Finding, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DuplicateSignature {
    pub vuln_type: String,
    pub location: String,
    pub severity: Severity,
}

impl DuplicateSignature {
    pub fn of(finding: &Finding) -> Self {
        Self {
            vuln_type: finding.vuln_type().to_string(),
            location: finding.location().to_string(),
            severity: finding.severity(),
        }
    }

    /// Stable content hash of the signature, for logs and reports.
    pub fn digest(&self) -> String {
        let input = format!("{}:{}:{}", self.vuln_type, self.location, self.severity);
        blake3::hash(input.as_bytes()).to_hex().to_string()
    }
}

impl fmt::Display for DuplicateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}[{}]", self.vuln_type, self.location, self.severity)
    }
}
