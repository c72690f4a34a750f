//! Error types for the arena engine.
//! One enum per concern; every enum maps onto a stable error code.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod finding_error;

pub use config_error::{ConfigError, ConfigResult};
pub use export_error::{ExportError, ExportResult};
pub use finding_error::{FindingError, FindingResult};
