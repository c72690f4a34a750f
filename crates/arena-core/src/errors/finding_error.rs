//! Construction errors for `Finding` records.
//! Fatal to the single record; callers reject it, never coerce it.

use super::error_code::{self, ArenaErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum FindingError {
    #[error("Invalid severity: {token:?} (expected critical, high, medium, low, or info)")]
    InvalidSeverity { token: String },

    #[error("Invalid CVSS score: {value} (must lie in [0, 10])")]
    CvssOutOfRange { value: f64 },

    #[error("Finding has an empty vulnerability type")]
    EmptyVulnType,

    #[error("Finding has an empty team id")]
    EmptyTeamId,
}

impl ArenaErrorCode for FindingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSeverity { .. } => error_code::INVALID_SEVERITY,
            Self::CvssOutOfRange { .. } => error_code::CVSS_OUT_OF_RANGE,
            Self::EmptyVulnType | Self::EmptyTeamId => error_code::EMPTY_FIELD,
        }
    }
}

pub type FindingResult<T> = Result<T, FindingError>;
