//! JSON export of championship metrics and learning data.
//!
//! Export is best-effort: failures come back as warnings and never touch
//! in-memory state.

pub mod document;
pub mod writer;

pub use document::{ExportDocument, SeverityBreakdown, TeamExport};
pub use writer::{try_export, write_json, ExportSummary};
