//! Severity bands and the per-severity table used for points, rewards, and histograms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FindingError;

/// One of the five recognized severity tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }

    /// Parse a severity token. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(token: &str) -> Result<Self, FindingError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "info" => Ok(Self::Info),
            _ => Err(FindingError::InvalidSeverity {
                token: token.to_string(),
            }),
        }
    }
}

impl FromStr for Severity {
    type Err = FindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per severity band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeverityTable<T> {
    pub critical: T,
    pub high: T,
    pub medium: T,
    pub low: T,
    pub info: T,
}

impl<T: Copy> SeverityTable<T> {
    pub fn get(&self, severity: Severity) -> T {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    pub fn get_mut(&mut self, severity: Severity) -> &mut T {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, T)> + '_ {
        Severity::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

impl SeverityTable<u32> {
    pub fn increment(&mut self, severity: Severity) {
        *self.get_mut(severity) += 1;
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, n)| n).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Severity::parse("CRITICAL").unwrap(), Severity::Critical);
        assert_eq!(Severity::parse(" High ").unwrap(), Severity::High);
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = Severity::parse("severe").unwrap_err();
        assert!(matches!(err, FindingError::InvalidSeverity { ref token } if token == "severe"));
    }

    #[test]
    fn test_display_round_trips() {
        for s in Severity::ALL {
            assert_eq!(Severity::parse(&s.to_string()).unwrap(), s);
        }
    }

    #[test]
    fn test_table_increment_and_total() {
        let mut table = SeverityTable::<u32>::default();
        table.increment(Severity::High);
        table.increment(Severity::High);
        table.increment(Severity::Info);
        assert_eq!(table.high, 2);
        assert_eq!(table.get(Severity::Info), 1);
        assert_eq!(table.total(), 3);
    }
}
