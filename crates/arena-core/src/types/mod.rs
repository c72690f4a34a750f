//! Shared data structures for the arena engine (no engine logic).

pub mod finding;
pub mod identifiers;
pub mod severity;
pub mod weights;

pub use finding::{Finding, NewFinding};
pub use identifiers::TeamId;
pub use severity::{Severity, SeverityTable};
pub use weights::StrategyWeights;
