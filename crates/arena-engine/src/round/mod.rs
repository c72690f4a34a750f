//! Per-round records and the championship coordinator that drives the
//! dedup → score → metrics → adapt flow once per round.

pub mod championship;
pub mod record;

pub use championship::{Championship, RoundOutcome};
pub use record::{RoundRecord, TeamRoundResult};
