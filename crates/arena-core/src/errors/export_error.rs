//! Export/persistence errors. Never fatal to a round: the coordinator
//! downgrades them to warnings and keeps the in-memory state.

use super::error_code::{self, ArenaErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export to {path} failed: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ArenaErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
