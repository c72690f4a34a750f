//! # arena-core
//!
//! Foundation crate for the competition arena engine.
//! Defines the finding model, strategy weights, errors, config, tracing, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ArenaConfig;
pub use errors::error_code::ArenaErrorCode;
pub use types::finding::{Finding, NewFinding};
pub use types::identifiers::TeamId;
pub use types::severity::{Severity, SeverityTable};
pub use types::weights::StrategyWeights;
